//! Render module - turns records into HTML fragments for the page containers

mod certifications;
mod expand;
mod filter;
mod posts;

pub use certifications::{render_certification, render_certifications};
pub use expand::{ExpandHook, ExpandOutcome, LogOnlyExpand};
pub use filter::{CategoryFilter, FilterControl, ALL};
pub use posts::{category_tag, PostRenderer, UNCATEGORIZED};

/// Placeholder for a container that ended up with no items.
///
/// `noun` names the content ("posts", "certifications"). When every
/// resource failed the message says so instead of showing an empty list.
pub fn load_state(noun: &str, failures: usize) -> String {
    if failures > 0 {
        format!(
            r#"<p class="load-error">Failed to load {} ({} request{} failed).</p>"#,
            noun,
            failures,
            if failures == 1 { "" } else { "s" }
        )
    } else {
        format!(r#"<p class="empty">No {} yet.</p>"#, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state() {
        assert_eq!(
            load_state("posts", 1),
            r#"<p class="load-error">Failed to load posts (1 request failed).</p>"#
        );
        assert!(load_state("posts", 3).contains("3 requests failed"));
        assert_eq!(load_state("certifications", 0), r#"<p class="empty">No certifications yet.</p>"#);
    }
}
