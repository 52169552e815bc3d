//! Typed page events and the effects handlers ask the page to apply

/// Something that happened on the page
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Window scrolled to a vertical offset
    Scroll { y: f64 },
    /// A section entered the viewport
    SectionVisible { id: String },
    /// The mobile menu button was pressed
    MenuToggle,
    /// The back-to-top button was pressed
    BackToTop,
    /// A blog filter button was pressed
    FilterSelected { tag: String },
    /// A rendered post was clicked
    PostClicked { index: usize },
}

/// A change for the page to apply
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Add (`on`) or remove a class on the elements matching `target`
    SetClass {
        target: String,
        class: &'static str,
        on: bool,
    },
    /// Show or hide the elements matching `target`
    SetVisible { target: String, visible: bool },
    /// Scroll the window
    ScrollTo { y: f64, smooth: bool },
    /// Replace the inner HTML of `target`
    SetHtml { target: String, html: String },
}

/// Reacts to events. Handlers ignore events they do not care about.
pub trait EventHandler: Send {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect>;
}

/// Fans each event out to every registered handler, in registration order
#[derive(Default)]
pub struct Dispatcher {
    handlers: Vec<Box<dyn EventHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<H>(&mut self, handler: H) -> &mut Self
    where
        H: EventHandler + 'static,
    {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Deliver an event and collect every resulting effect
    pub fn dispatch(&mut self, event: &UiEvent) -> Vec<Effect> {
        let effects: Vec<Effect> = self
            .handlers
            .iter_mut()
            .flat_map(|h| h.handle(event))
            .collect();
        tracing::trace!("{:?} -> {} effects", event, effects.len());
        effects
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
