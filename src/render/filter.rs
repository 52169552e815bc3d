//! Category filter controls for the post list

use crate::content::PostRecord;
use crate::helpers::html_escape;

use super::posts::category_tag;

/// Filter value that shows every post
pub const ALL: &str = "all";

/// One filter button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    /// Value matched against each post's category tag
    pub tag: String,
    /// Button text
    pub label: String,
}

/// Filter state: the available controls and exactly one active control
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    controls: Vec<FilterControl>,
    active: usize,
}

impl CategoryFilter {
    /// Controls for `all` plus each distinct category, in first-seen order
    pub fn from_posts(posts: &[PostRecord]) -> Self {
        let mut controls = vec![FilterControl {
            tag: ALL.to_string(),
            label: "All".to_string(),
        }];

        for post in posts {
            let tag = category_tag(post);
            if controls.iter().any(|c| c.tag == tag) {
                continue;
            }
            let label = match post.category().trim() {
                "" => "Uncategorized".to_string(),
                name => name.to_string(),
            };
            controls.push(FilterControl { tag, label });
        }

        Self {
            controls,
            active: 0,
        }
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    /// Tag of the active control
    pub fn active(&self) -> &str {
        &self.controls[self.active].tag
    }

    /// Activate the control for `tag`. Unknown tags leave the filter unchanged.
    pub fn select(&mut self, tag: &str) -> bool {
        match self.controls.iter().position(|c| c.tag == tag) {
            Some(pos) => {
                self.active = pos;
                true
            }
            None => {
                tracing::debug!("Ignoring unknown filter {:?}", tag);
                false
            }
        }
    }

    /// Whether an item with this category tag is shown
    pub fn is_visible(&self, tag: &str) -> bool {
        let active = self.active();
        active == ALL || active == tag
    }

    /// Visibility of each post, in order
    pub fn visibility(&self, posts: &[PostRecord]) -> Vec<bool> {
        posts
            .iter()
            .map(|p| self.is_visible(&category_tag(p)))
            .collect()
    }

    /// Render the control bar; only the active button has the `active` class
    pub fn render_controls(&self) -> String {
        let buttons: Vec<String> = self
            .controls
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let class = if i == self.active {
                    "filter-btn active"
                } else {
                    "filter-btn"
                };
                format!(
                    r#"  <button class="{}" data-filter="{}">{}</button>"#,
                    class,
                    c.tag,
                    html_escape(&c.label)
                )
            })
            .collect();

        format!(
            "<div class=\"blog-filters\">\n{}\n</div>",
            buttons.join("\n")
        )
    }
}
