//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Take at most `length` characters from the start of a string
pub fn truncate_chars(s: &str, length: usize) -> &str {
    match s.char_indices().nth(length) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Generate an anchor tag that opens in a new tab
///
/// # Examples
/// ```ignore
/// external_link("https://example.com", "Verify") // -> <a href="https://example.com" target="_blank" rel="noopener">Verify</a>
/// ```
pub fn external_link(href: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
        html_escape(href),
        html_escape(text)
    )
}

/// Whether a URL is safe to place in an href
pub fn is_http_url(url: &str) -> bool {
    let lowered = url.trim().to_ascii_lowercase();
    lowered.starts_with("http://") || lowered.starts_with("https://")
}
