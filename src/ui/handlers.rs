//! Built-in page handlers

use std::collections::HashSet;

use super::events::{Effect, EventHandler, UiEvent};
use super::header::{HeaderController, HeaderState};
use crate::content::PostRecord;
use crate::render::{CategoryFilter, ExpandHook, ExpandOutcome};

fn set_class(target: impl Into<String>, class: &'static str, on: bool) -> Effect {
    Effect::SetClass {
        target: target.into(),
        class,
        on,
    }
}

/// Shows the back-to-top button past a scroll threshold
pub struct BackToTop {
    threshold: f64,
    visible: Option<bool>,
}

impl BackToTop {
    pub const TARGET: &'static str = "#backToTop";

    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: None,
        }
    }
}

impl EventHandler for BackToTop {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::Scroll { y } => {
                let visible = *y > self.threshold;
                if self.visible == Some(visible) {
                    return Vec::new();
                }
                self.visible = Some(visible);
                vec![Effect::SetVisible {
                    target: Self::TARGET.to_string(),
                    visible,
                }]
            }
            UiEvent::BackToTop => vec![Effect::ScrollTo {
                y: 0.0,
                smooth: true,
            }],
            _ => Vec::new(),
        }
    }
}

/// Opens and closes the mobile navigation
#[derive(Default)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub const TARGET: &'static str = ".nav";
}

impl EventHandler for MenuToggle {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::MenuToggle => {
                self.open = !self.open;
                vec![set_class(Self::TARGET, "active", self.open)]
            }
            _ => Vec::new(),
        }
    }
}

/// Fades sections in the first time they become visible
#[derive(Default)]
pub struct SectionReveal {
    revealed: HashSet<String>,
}

impl EventHandler for SectionReveal {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::SectionVisible { id } if self.revealed.insert(id.clone()) => {
                vec![set_class(format!("#{}", id), "visible", true)]
            }
            _ => Vec::new(),
        }
    }
}

/// Applies the blog category filter to buttons and posts
pub struct FilterBar {
    filter: CategoryFilter,
    tags: Vec<String>,
}

impl FilterBar {
    pub fn new(posts: &[PostRecord]) -> Self {
        Self {
            filter: CategoryFilter::from_posts(posts),
            tags: posts.iter().map(crate::render::category_tag).collect(),
        }
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }
}

impl EventHandler for FilterBar {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect> {
        let UiEvent::FilterSelected { tag } = event else {
            return Vec::new();
        };
        if !self.filter.select(tag) {
            return Vec::new();
        }

        let active = self.filter.active().to_string();
        let buttons = self.filter.controls().iter().map(|c| {
            set_class(
                format!(r#".filter-btn[data-filter="{}"]"#, c.tag),
                "active",
                c.tag == active,
            )
        });
        let posts = self.tags.iter().enumerate().map(|(i, t)| {
            set_class(
                format!(r#"article[data-index="{}"]"#, i),
                "hidden",
                !self.filter.is_visible(t),
            )
        });

        buttons.chain(posts).collect()
    }
}

/// Hands post clicks to an [`ExpandHook`]
pub struct PostClick<H> {
    posts: Vec<PostRecord>,
    hook: H,
}

impl<H: ExpandHook> PostClick<H> {
    pub fn new(posts: Vec<PostRecord>, hook: H) -> Self {
        Self { posts, hook }
    }
}

impl<H: ExpandHook> EventHandler for PostClick<H> {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect> {
        let UiEvent::PostClicked { index } = event else {
            return Vec::new();
        };
        let Some(post) = self.posts.get(*index) else {
            tracing::debug!("Click on unknown post {}", index);
            return Vec::new();
        };

        match self.hook.expand(*index, post) {
            ExpandOutcome::Expanded(html) => vec![Effect::SetHtml {
                target: format!(r#"article[data-index="{}"] div"#, index),
                html,
            }],
            ExpandOutcome::NotImplemented => Vec::new(),
        }
    }
}

/// Drives the header classes from scroll events
pub struct HeaderClasses {
    controller: HeaderController,
}

impl HeaderClasses {
    pub const TARGET: &'static str = "header";

    pub fn new(controller: HeaderController) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &HeaderController {
        &self.controller
    }

    /// Effects that bring the header element in line with `state`
    pub fn effects(state: HeaderState) -> Vec<Effect> {
        vec![
            set_class(Self::TARGET, "sticky", state.sticky),
            set_class(Self::TARGET, "hidden", state.hidden),
        ]
    }
}

impl EventHandler for HeaderClasses {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::Scroll { y } => Self::effects(self.controller.on_scroll(*y)),
            _ => Vec::new(),
        }
    }
}
