//! Sticky, auto-hiding header
//!
//! All scroll state lives in [`HeaderController`]. Scrolling down past
//! the hide offset hides the header, scrolling up shows it again and
//! arms a timer that hides it once scrolling has paused.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::UiConfig;

/// Classes applied to the header element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub sticky: bool,
    pub hidden: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct HeaderSettings {
    pub sticky_offset: f64,
    pub hide_offset: f64,
    pub hide_delay: Duration,
}

impl From<&UiConfig> for HeaderSettings {
    fn from(config: &UiConfig) -> Self {
        Self {
            sticky_offset: config.sticky_offset,
            hide_offset: config.hide_offset,
            hide_delay: Duration::from_millis(config.hide_delay_ms),
        }
    }
}

pub struct HeaderController {
    settings: HeaderSettings,
    last_scroll_y: f64,
    hide_timer: Option<JoinHandle<()>>,
    state: Arc<watch::Sender<HeaderState>>,
}

impl HeaderController {
    pub fn new(settings: HeaderSettings) -> Self {
        let (tx, _rx) = watch::channel(HeaderState::default());
        Self {
            settings,
            last_scroll_y: 0.0,
            hide_timer: None,
            state: Arc::new(tx),
        }
    }

    /// Observe state changes, including ones made by the hide timer
    pub fn subscribe(&self) -> watch::Receiver<HeaderState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> HeaderState {
        *self.state.borrow()
    }

    /// Handle a new scroll position and return the resulting state
    pub fn on_scroll(&mut self, y: f64) -> HeaderState {
        self.cancel_timer();

        let current = self.state();
        let past_hide = y > self.settings.hide_offset;
        let hidden = if !past_hide {
            false
        } else if y > self.last_scroll_y {
            true
        } else if y < self.last_scroll_y {
            false
        } else {
            current.hidden
        };

        let next = HeaderState {
            sticky: y > self.settings.sticky_offset,
            hidden,
        };
        self.last_scroll_y = y;
        self.state.send_replace(next);

        if past_hide && !hidden {
            self.arm_timer();
        }

        next
    }

    /// Cancel any pending hide and return to the top-of-page state
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.last_scroll_y = 0.0;
        self.state.send_replace(HeaderState::default());
    }

    fn arm_timer(&mut self) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No runtime, header auto-hide disabled");
            return;
        };

        let state = Arc::clone(&self.state);
        let delay = self.settings.hide_delay;
        self.hide_timer = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            state.send_modify(|s| s.hidden = true);
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.hide_timer.take() {
            timer.abort();
        }
    }
}

impl Drop for HeaderController {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
