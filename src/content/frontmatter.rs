//! Front-matter parsing
//!
//! Posts carry a flat `key: value` header between two `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-01-15
//! ---
//! Body text
//! ```

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref FRONT_MATTER_RE: Regex = Regex::new(r"(?s)\A---\n(.*?)\n---\n(.*)\z").unwrap();
}

/// Flat string-to-string metadata from a post header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
}

impl FrontMatter {
    /// Split a document into its header fields and body.
    ///
    /// A document that does not have the `---` header shape is not an
    /// error: the fields are empty and the body is the whole input.
    pub fn parse(text: &str) -> (Self, &str) {
        match FRONT_MATTER_RE.captures(text) {
            Some(caps) => {
                let meta = caps.get(1).map_or("", |m| m.as_str());
                let body = caps.get(2).map_or("", |m| m.as_str());
                (Self::parse_block(meta), body)
            }
            None => (FrontMatter::default(), text),
        }
    }

    /// Parse the lines between the delimiters
    fn parse_block(block: &str) -> Self {
        let mut fm = FrontMatter::default();

        for line in block.lines() {
            // Only the first colon separates; the value may contain more
            match line.find(':') {
                Some(pos) if pos > 0 => {
                    let key = line[..pos].trim();
                    let value = line[pos + 1..].trim();
                    fm.insert(key, value);
                }
                _ => {}
            }
        }

        fm
    }

    /// Render the header block, delimiters included
    pub fn to_header(&self) -> String {
        let lines: Vec<String> = self
            .fields
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect();
        format!("---\n{}\n---\n", lines.join("\n"))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Set a field. A repeated key keeps its first position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.fields.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn into_fields(self) -> IndexMap<String, String> {
        self.fields
    }
}

impl FromIterator<(String, String)> for FrontMatter {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut fm = FrontMatter::default();
        for (k, v) in iter {
            fm.insert(k, v);
        }
        fm
    }
}
