//! Popup presentation engine
//!
//! Drives show/hide lifecycles for popups (toasts, floaters, modal-style
//! sheets) without rendering anything itself. The host application feeds
//! measurements, gestures, and animation completions in; the engine
//! answers with offset targets and lifecycle notifications through the
//! [`PopupHost`] adapter.
//!
//! The value types and the pure offset resolver live in `popkit_core`;
//! this crate adds the stateful parts: the lifecycle state machine, drag
//! interpretation, autohide timing, and the multi-popup registry.
//!
//! ```
//! use popkit_core::params::PopupParameters;
//! use popkit_core::types::Position;
//! use popkit_engine::registry::{popup_manager, PopupManagerExt};
//! use popkit_engine::testing::RecordingHost;
//!
//! let manager = popup_manager();
//! let (host, _calls) = RecordingHost::new();
//! let handle = manager.attach(
//!     PopupParameters::new().position(Position::Bottom).autohide_ms(Some(3000)),
//!     Box::new(host),
//! );
//! manager.set_presentation_intent(handle, true);
//! ```

pub mod binding;
pub mod dispatcher;
pub mod drag;
pub mod engine;
pub mod error;
pub mod host;
pub mod registry;
pub mod state;
pub mod testing;

pub use binding::ItemBinding;
pub use drag::{DragInterpreter, DragOutcome, DragState};
pub use engine::PopupEngine;
pub use error::{PopupError, Result};
pub use host::{AnimationToken, PopupHost};
pub use registry::{popup_manager, PopupHandle, PopupManager, PopupManagerExt, PopupRegistry};
pub use state::{popup_events, PopupState, StateTransitions};
