//! Host adapter: everything the engine asks of its renderer
//!
//! The engine drives a host through this trait and never assumes a
//! particular rendering or animation stack. An [`animate_to`] request is
//! a continuation: the host runs the transition however it likes and
//! reports the carried token back through
//! `PopupEngine::notify_animation_complete` exactly once.
//!
//! [`animate_to`]: PopupHost::animate_to

use popkit_core::animation::AnimationSpec;
use popkit_core::geometry::Point;
use popkit_core::types::DismissSource;

/// Generation token identifying one animation request
///
/// A newer request supersedes older ones; completions carrying a stale
/// token are ignored by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationToken(pub(crate) u64);

impl AnimationToken {
    /// Raw generation value, useful for host-side bookkeeping
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Adapter the host application implements to render a popup
///
/// Only `render_offset` and `animate_to` are required; the lifecycle
/// notifications default to no-ops for hosts that do not care.
pub trait PopupHost: Send {
    /// Apply an offset immediately, with no animation
    fn render_offset(&mut self, offset: Point);

    /// Run an animated transition to `target` and report `token` back
    /// through `notify_animation_complete` exactly once when it finishes
    fn animate_to(&mut self, target: Point, spec: AnimationSpec, token: AnimationToken);

    /// All offsets are calculated; everything is ready for animation
    fn position_calculated(&mut self) {}

    /// A show/hide slide finished
    fn animation_completed(&mut self) {}

    /// A dismissal is starting; the hide animation has not been requested yet
    fn will_dismiss(&mut self, _source: DismissSource) {}

    /// Teardown finished; content is detached
    fn did_dismiss(&mut self, _source: DismissSource) {}

    /// Reset the bound presentation value to absent (false / none)
    fn clear_presentation_intent(&mut self) {}

    /// Whether this platform delivers drag gestures at all
    fn supports_drag(&self) -> bool {
        true
    }
}
