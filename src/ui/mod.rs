//! Page behaviour as explicit state machines
//!
//! Page callbacks are modelled as [`UiEvent`]s delivered through a
//! [`Dispatcher`]; handlers answer with [`Effect`]s for the page to apply.

mod events;
mod handlers;
mod header;

pub use events::{Dispatcher, Effect, EventHandler, UiEvent};
pub use handlers::{BackToTop, FilterBar, HeaderClasses, MenuToggle, PostClick, SectionReveal};
pub use header::{HeaderController, HeaderSettings, HeaderState};

use tokio::sync::watch;

use crate::config::UiConfig;
use crate::content::PostRecord;
use crate::render::LogOnlyExpand;

/// Dispatcher with every built-in handler registered for a loaded post list.
///
/// The receiver reports header changes made by the auto-hide timer, which
/// happen between events; map them with [`HeaderClasses::effects`].
pub fn page_dispatcher(
    config: &UiConfig,
    posts: &[PostRecord],
) -> (Dispatcher, watch::Receiver<HeaderState>) {
    let header = HeaderController::new(config.into());
    let header_rx = header.subscribe();

    let mut dispatcher = Dispatcher::new();
    dispatcher
        .register(HeaderClasses::new(header))
        .register(BackToTop::new(config.back_to_top_threshold))
        .register(MenuToggle::default())
        .register(SectionReveal::default())
        .register(FilterBar::new(posts))
        .register(PostClick::new(posts.to_vec(), LogOnlyExpand));
    (dispatcher, header_rx)
}
