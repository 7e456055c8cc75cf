//! Presentation lifecycle state machine
//!
//! Hidden -> Appearing -> Shown -> Disappearing -> Hidden, driven by
//! event codes. The table includes two interrupt edges: a dismissal can
//! arrive while still appearing, and a show request during an in-flight
//! hide takes the dismissal back instead of completing it.

/// Event codes for the popup state machine
pub mod popup_events {
    /// Host wants the popup shown (Hidden/Disappearing -> Appearing)
    pub const SHOW: u32 = 30001;
    /// A dismissal was requested (Appearing/Shown -> Disappearing)
    pub const DISMISS: u32 = 30002;
    /// Host reported the current transition finished
    pub const ANIMATION_COMPLETE: u32 = 30003;
}

/// Map events to state transitions
pub trait StateTransitions: Sized {
    /// Returns the next state, or `None` if the event does not apply
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// Lifecycle state of a single popup instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PopupState {
    /// Not rendered; content detached
    #[default]
    Hidden,
    /// Content attached, sliding in (or waiting for first layout)
    Appearing,
    /// Fully visible and interactive
    Shown,
    /// Sliding out; content still attached until the animation completes
    Disappearing,
}

impl PopupState {
    /// Content is attached to the host's view graph
    pub fn is_rendered(&self) -> bool {
        !matches!(self, PopupState::Hidden)
    }

    /// A show or hide transition is in flight
    pub fn is_animating(&self) -> bool {
        matches!(self, PopupState::Appearing | PopupState::Disappearing)
    }
}

impl StateTransitions for PopupState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use popup_events::*;
        use PopupState::*;

        match (self, event) {
            // Hidden -> Appearing: attach content, start show animation
            (Hidden, SHOW) => Some(Appearing),

            // Appearing -> Shown: slide-in finished
            (Appearing, ANIMATION_COMPLETE) => Some(Shown),

            // Shown -> Disappearing: start hide animation
            (Shown, DISMISS) => Some(Disappearing),

            // Disappearing -> Hidden: slide-out finished, detach content
            (Disappearing, ANIMATION_COMPLETE) => Some(Hidden),

            // Interrupt the slide-in with a dismissal
            (Appearing, DISMISS) => Some(Disappearing),

            // Take back an in-flight hide instead of completing it
            (Disappearing, SHOW) => Some(Appearing),

            _ => None,
        }
    }
}
