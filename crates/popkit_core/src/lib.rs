//! popkit value layer
//!
//! Pure, engine-free building blocks for the popkit presentation system:
//!
//! - **Geometry**: points, rects, insets, and the measured-geometry cache
//! - **Parameters**: immutable fluent-builder popup configuration
//! - **Offset Resolution**: displayed/hidden offsets for the nine anchors
//! - **Item Intent**: item-keyed presentation derivation
//!
//! Everything here is deterministic and side-effect free; the stateful
//! lifecycle lives in `popkit_engine`.
//!
//! # Example
//!
//! ```
//! use popkit_core::geometry::{MeasuredGeometry, Rect};
//! use popkit_core::offset::{displayed_offset, PopupLayout};
//! use popkit_core::params::PopupParameters;
//! use popkit_core::types::Position;
//!
//! let params = PopupParameters::new().position(Position::Bottom);
//! let layout = PopupLayout::from_params(&params);
//!
//! let mut geo = MeasuredGeometry::new();
//! geo.container = Rect::new(0.0, 0.0, 400.0, 800.0);
//! geo.content = Rect::new(0.0, 0.0, 400.0, 100.0);
//!
//! assert!(geo.is_ready());
//! assert_eq!(displayed_offset(&layout, &geo).y, 700.0);
//! ```

pub mod animation;
pub mod color;
pub mod geometry;
pub mod intent;
pub mod offset;
pub mod params;
pub mod types;

pub use animation::{AnimationSpec, Easing};
pub use color::Color;
pub use geometry::{EdgeInsets, MeasuredGeometry, Point, Rect, Size};
pub use intent::{IntentChange, ItemIntent};
pub use offset::{displayed_offset, hidden_offset, PopupLayout};
pub use params::{BackgroundViewId, DismissCallback, PopupParameters};
pub use types::{AppearFrom, DismissSource, PopupType, Position};
