//! Click-to-expand hook for rendered posts
//!
//! There is no full-post view yet. The hook exists so a caller can plug
//! one in without touching the renderer or the event handlers.

use crate::content::PostRecord;

/// Result of asking a hook to expand a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandOutcome {
    /// The hook rendered the full post
    Expanded(String),
    /// No expansion view is available
    NotImplemented,
}

/// Called when a rendered post is clicked
pub trait ExpandHook: Send + Sync {
    fn expand(&self, index: usize, post: &PostRecord) -> ExpandOutcome;
}

/// Default hook: records the click and does nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOnlyExpand;

impl ExpandHook for LogOnlyExpand {
    fn expand(&self, index: usize, post: &PostRecord) -> ExpandOutcome {
        tracing::info!("Post {} clicked: {:?} (expansion not available)", index, post.title());
        ExpandOutcome::NotImplemented
    }
}
