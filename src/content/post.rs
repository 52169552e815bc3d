//! Post and certification records

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Reverse;

use super::FrontMatter;

/// A blog post: header fields plus the markdown body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Header fields (title, date, category, ...)
    #[serde(flatten)]
    pub fields: IndexMap<String, String>,

    /// Raw markdown body
    pub content: String,
}

impl PostRecord {
    /// Merge header fields and body. A `content` header field is replaced by the body.
    pub fn new(front_matter: FrontMatter, content: impl Into<String>) -> Self {
        let mut fields = front_matter.into_fields();
        fields.shift_remove("content");
        Self {
            fields,
            content: content.into(),
        }
    }

    /// Parse a raw document into a record
    pub fn from_document(text: &str) -> Self {
        let (fm, body) = FrontMatter::parse(text);
        Self::new(fm, body)
    }

    /// Build a record from one object of a JSON posts array.
    ///
    /// Strings are kept as-is, numbers and booleans are stringified, and
    /// anything else is dropped.
    pub fn from_json(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let mut fields = IndexMap::new();
        let mut content = String::new();

        for (key, value) in object {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => continue,
            };
            if key == "content" {
                content = value;
            } else {
                fields.insert(key.clone(), value);
            }
        }

        Self { fields, content }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn title(&self) -> &str {
        self.field("title").unwrap_or("")
    }

    pub fn date(&self) -> &str {
        self.field("date").unwrap_or("")
    }

    pub fn category(&self) -> &str {
        self.field("category").unwrap_or("")
    }

    /// URL-friendly name derived from the title
    pub fn slug(&self) -> String {
        slug::slugify(self.title())
    }

    /// Parse the date field, if present and readable
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        self.field("date").and_then(parse_date_string)
    }
}

/// Sort posts newest first.
///
/// Posts without a readable date go after every dated post and keep
/// their relative order.
pub fn sort_posts(posts: &mut [PostRecord]) {
    posts.sort_by_cached_key(|p| Reverse(p.parsed_date()));
}

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset, compared in UTC
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    None
}

/// A certification entry from the certifications JSON array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRecord {
    pub title: String,
    pub issuer: String,
    pub issued_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
}

/// `null` reads the same as an absent list
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
