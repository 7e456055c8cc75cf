//! Popup parameters: an immutable-once-built configuration value
//!
//! Built with fluent setters that consume and return the value, so a
//! configured copy can be derived without hidden mutation:
//!
//! ```
//! use popkit_core::params::PopupParameters;
//! use popkit_core::types::{AppearFrom, PopupType, Position};
//!
//! let params = PopupParameters::new()
//!     .kind(PopupType::floater())
//!     .position(Position::TopTrailing)
//!     .appear_from(AppearFrom::Right)
//!     .autohide_ms(Some(3000));
//! ```
//!
//! Equality and hashing deliberately ignore the callbacks and the
//! animation spec: callbacks have no value identity, and the animation
//! curve is not load-bearing for configuration identity.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::animation::AnimationSpec;
use crate::color::Color;
use crate::types::{AppearFrom, DismissSource, PopupType, Position};

/// Callback invoked around a dismissal, tagged with its cause
pub type DismissCallback = Arc<dyn Fn(DismissSource) + Send + Sync>;

/// Host-interpreted token naming a custom background view
///
/// The engine never renders; the host maps this id to actual content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BackgroundViewId(pub u64);

/// Declarative popup configuration
#[derive(Clone, Default)]
pub struct PopupParameters {
    /// Popup kind (affects default anchor and padding behavior)
    pub kind: PopupType,
    /// Anchor override; defaults to the kind's anchor
    pub position: Option<Position>,
    /// Slide edge override; derived from the anchor when unset
    pub appear_from: Option<AppearFrom>,
    /// Transition spec forwarded to the host
    pub animation: AnimationSpec,
    /// If set, dismiss this many milliseconds after fully shown
    pub autohide_ms: Option<u64>,
    /// Allow dismiss by dragging - default is true
    pub drag_to_dismiss: bool,
    /// Close on tap inside the content - default is true
    pub close_on_tap: bool,
    /// Close on tap outside the content - default is false
    pub close_on_tap_outside: bool,
    /// Background color for the outside area
    pub background_color: Color,
    /// Custom background view for the outside area
    pub background_view: Option<BackgroundViewId>,
    /// If true - offsets are computed against the full screen instead of
    /// the host container, and taps do not pass through the background
    pub is_opaque: bool,
    /// Move up by the keyboard height while it is displayed
    pub use_keyboard_safe_area: bool,
    /// Called when the dismiss animation starts
    pub will_dismiss: Option<DismissCallback>,
    /// Called when the dismiss animation ends
    pub dismissed: Option<DismissCallback>,
}

impl PopupParameters {
    pub fn new() -> Self {
        Self {
            kind: PopupType::Default,
            position: None,
            appear_from: None,
            animation: AnimationSpec::default(),
            autohide_ms: None,
            drag_to_dismiss: true,
            close_on_tap: true,
            close_on_tap_outside: false,
            background_color: Color::TRANSPARENT,
            background_view: None,
            is_opaque: false,
            use_keyboard_safe_area: false,
            will_dismiss: None,
            dismissed: None,
        }
    }

    pub fn kind(mut self, kind: PopupType) -> Self {
        self.kind = kind;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn appear_from(mut self, appear_from: AppearFrom) -> Self {
        self.appear_from = Some(appear_from);
        self
    }

    pub fn animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    /// If `None` - never hides on its own
    pub fn autohide_ms(mut self, autohide_ms: Option<u64>) -> Self {
        self.autohide_ms = autohide_ms;
        self
    }

    pub fn drag_to_dismiss(mut self, drag_to_dismiss: bool) -> Self {
        self.drag_to_dismiss = drag_to_dismiss;
        self
    }

    pub fn close_on_tap(mut self, close_on_tap: bool) -> Self {
        self.close_on_tap = close_on_tap;
        self
    }

    pub fn close_on_tap_outside(mut self, close_on_tap_outside: bool) -> Self {
        self.close_on_tap_outside = close_on_tap_outside;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn background_view(mut self, id: BackgroundViewId) -> Self {
        self.background_view = Some(id);
        self
    }

    pub fn is_opaque(mut self, is_opaque: bool) -> Self {
        self.is_opaque = is_opaque;
        self
    }

    pub fn use_keyboard_safe_area(mut self, use_keyboard_safe_area: bool) -> Self {
        self.use_keyboard_safe_area = use_keyboard_safe_area;
        self
    }

    pub fn will_dismiss_callback<F>(mut self, f: F) -> Self
    where
        F: Fn(DismissSource) + Send + Sync + 'static,
    {
        self.will_dismiss = Some(Arc::new(f));
        self
    }

    pub fn dismiss_callback<F>(mut self, f: F) -> Self
    where
        F: Fn(DismissSource) + Send + Sync + 'static,
    {
        self.dismissed = Some(Arc::new(f));
        self
    }

    /// Effective anchor: the explicit override or the kind's default
    pub fn resolved_position(&self) -> Position {
        self.position.unwrap_or_else(|| self.kind.default_position())
    }

    /// Effective slide edge
    ///
    /// When unset, derived from the anchor: leading column slides from
    /// the left, trailing column from the right, the plain top anchor
    /// from the top, everything else from the bottom.
    pub fn resolved_appear_from(&self) -> AppearFrom {
        if let Some(appear_from) = self.appear_from {
            return appear_from;
        }
        let position = self.resolved_position();
        if position.is_leading() {
            AppearFrom::Left
        } else if position.is_trailing() {
            AppearFrom::Right
        } else if position == Position::Top {
            AppearFrom::Top
        } else {
            AppearFrom::Bottom
        }
    }
}

impl std::fmt::Debug for PopupParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopupParameters")
            .field("kind", &self.kind)
            .field("position", &self.position)
            .field("appear_from", &self.appear_from)
            .field("animation", &self.animation)
            .field("autohide_ms", &self.autohide_ms)
            .field("drag_to_dismiss", &self.drag_to_dismiss)
            .field("close_on_tap", &self.close_on_tap)
            .field("close_on_tap_outside", &self.close_on_tap_outside)
            .field("background_color", &self.background_color)
            .field("background_view", &self.background_view)
            .field("is_opaque", &self.is_opaque)
            .field("use_keyboard_safe_area", &self.use_keyboard_safe_area)
            .field("will_dismiss", &self.will_dismiss.as_ref().map(|_| ".."))
            .field("dismissed", &self.dismissed.as_ref().map(|_| ".."))
            .finish()
    }
}

impl PartialEq for PopupParameters {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.position == other.position
            && self.appear_from == other.appear_from
            && self.autohide_ms == other.autohide_ms
            && self.drag_to_dismiss == other.drag_to_dismiss
            && self.close_on_tap == other.close_on_tap
            && self.close_on_tap_outside == other.close_on_tap_outside
            && self.background_color == other.background_color
            && self.is_opaque == other.is_opaque
            && self.use_keyboard_safe_area == other.use_keyboard_safe_area
    }
}

impl Hash for PopupParameters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.position.hash(state);
        self.appear_from.hash(state);
        self.autohide_ms.hash(state);
        self.drag_to_dismiss.hash(state);
        self.close_on_tap.hash(state);
        self.close_on_tap_outside.hash(state);
        self.background_color.hash(state);
        self.is_opaque.hash(state);
        self.use_keyboard_safe_area.hash(state);
    }
}
