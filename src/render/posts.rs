//! Blog post preview list

use crate::content::{MarkdownRenderer, PostRecord};
use crate::helpers::{html_escape, truncate_chars};

/// Tag used for posts without a category
pub const UNCATEGORIZED: &str = "uncategorized";

/// Category tag carried by a rendered post.
///
/// `+` and `#` are spelled out before slugifying so "C++" and "C#" stay
/// apart; case and spacing differences still share a tag.
pub fn category_tag(post: &PostRecord) -> String {
    let spelled = post
        .category()
        .replace('+', " plus ")
        .replace('#', " sharp ");
    let tag = slug::slugify(spelled);
    if tag.is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        tag
    }
}

/// Renders posts as preview cards
pub struct PostRenderer<'a> {
    markdown: &'a MarkdownRenderer,
    preview_length: usize,
}

impl<'a> PostRenderer<'a> {
    pub fn new(markdown: &'a MarkdownRenderer, preview_length: usize) -> Self {
        Self {
            markdown,
            preview_length,
        }
    }

    /// Render one preview card.
    ///
    /// The body is cut to the preview length before conversion and the
    /// ellipsis is always added, even when nothing was cut.
    pub fn render_preview(&self, index: usize, post: &PostRecord) -> String {
        let excerpt = truncate_chars(&post.content, self.preview_length);
        let body = self.markdown.render(excerpt);

        format!(
            r#"<article class="project" data-category="{}" data-index="{}">
  <h3>{}</h3>
  <small>{}</small>
  <div>{}...</div>
</article>"#,
            category_tag(post),
            index,
            html_escape(post.title()),
            html_escape(post.date()),
            body
        )
    }

    /// Render the whole list in the given order
    pub fn render_list(&self, posts: &[PostRecord]) -> String {
        posts
            .iter()
            .enumerate()
            .map(|(i, post)| self.render_preview(i, post))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(markdown: &MarkdownRenderer, len: usize) -> PostRenderer<'_> {
        PostRenderer::new(markdown, len)
    }

    #[test]
    fn test_render_preview() {
        let markdown = MarkdownRenderer::new();
        let post = PostRecord::from_document(
            "---\ntitle: AI vs Coding\ndate: 2024-04-01\ncategory: Machine Learning\n---\nShort **body**.",
        );
        let html = renderer(&markdown, 100).render_preview(3, &post);

        assert!(html.contains(r#"data-category="machine-learning""#));
        assert!(html.contains(r#"data-index="3""#));
        assert!(html.contains("<h3>AI vs Coding</h3>"));
        assert!(html.contains("<small>2024-04-01</small>"));
        assert!(html.contains("<strong>body</strong>"));
        // Ellipsis appended although the body was not cut
        assert!(html.contains("</p>\n...</div>"));
    }

    #[test]
    fn test_preview_is_truncated() {
        let markdown = MarkdownRenderer::new();
        let body = "a".repeat(150);
        let post = PostRecord::from_document(&format!("---\ntitle: Long\n---\n{}", body));

        let html = renderer(&markdown, 100).render_preview(0, &post);
        assert!(html.contains(&"a".repeat(100)));
        assert!(!html.contains(&"a".repeat(101)));

        let html = renderer(&markdown, 200).render_preview(0, &post);
        assert!(html.contains(&"a".repeat(150)));
    }

    #[test]
    fn test_missing_fields_render_blank() {
        let markdown = MarkdownRenderer::new();
        let post = PostRecord::from_document("plain text only");
        let html = renderer(&markdown, 100).render_preview(0, &post);
        assert!(html.contains("<h3></h3>"));
        assert!(html.contains("<small></small>"));
        assert!(html.contains(r#"data-category="uncategorized""#));
    }

    #[test]
    fn test_title_is_escaped() {
        let markdown = MarkdownRenderer::new();
        let post = PostRecord::from_document("---\ntitle: <b>Bold</b> & more\n---\nx");
        let html = renderer(&markdown, 100).render_preview(0, &post);
        assert!(html.contains("<h3>&lt;b&gt;Bold&lt;/b&gt; &amp; more</h3>"));
    }

    #[test]
    fn test_category_tags_keep_symbols_apart() {
        let tag = |category: &str| {
            category_tag(&PostRecord::from_document(&format!(
                "---\ncategory: {}\n---\n",
                category
            )))
        };
        assert_eq!(tag("C++"), "c-plus-plus");
        assert_eq!(tag("C#"), "c-sharp");
        assert_eq!(tag("C"), "c");
        assert_eq!(tag("Web Dev"), tag("web dev"));
        assert_eq!(tag("  "), UNCATEGORIZED);
    }

    #[test]
    fn test_render_list_keeps_order() {
        let markdown = MarkdownRenderer::new();
        let posts = vec![
            PostRecord::from_document("---\ntitle: First\n---\none"),
            PostRecord::from_document("---\ntitle: Second\n---\ntwo"),
        ];
        let html = renderer(&markdown, 100).render_list(&posts);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("<article").count(), 2);
    }
}
