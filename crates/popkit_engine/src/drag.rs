//! Drag-to-dismiss interpretation
//!
//! A drag only acts along the axis implied by the appear edge, and only
//! in the direction that moves the content further off its resting edge;
//! everything else contributes zero offset. On release, a translation
//! past one third of the content extent in the valid direction commits a
//! dismissal; anything less cancels and snaps back.
//!
//! The last released offset is kept until the snap-back settles so an
//! interrupted re-drag continues from where the content actually is, not
//! from zero.

use popkit_core::geometry::{Point, Size};
use popkit_core::types::AppearFrom;

/// Whether a finished drag dismisses the popup or snaps back
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Past the threshold: dismiss
    Commit,
    /// Short of the threshold: animate back to rest
    Cancel,
}

/// State of the in-progress gesture
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Inactive,
    Dragging {
        translation: Size,
    },
}

impl DragState {
    pub fn translation(&self) -> Size {
        match self {
            DragState::Inactive => Size::ZERO,
            DragState::Dragging { translation } => *translation,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Converts drag deltas into offset overrides and a commit/cancel decision
#[derive(Clone, Copy, Debug, Default)]
pub struct DragInterpreter {
    state: DragState,
    /// Offset of the last cancelled drag, kept until the snap-back settles
    last_offset: Size,
}

impl DragInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn last_offset(&self) -> Size {
        self.last_offset
    }

    /// Record an in-progress drag delta
    pub fn update(&mut self, dx: f32, dy: f32) {
        self.state = DragState::Dragging {
            translation: Size::new(dx, dy),
        };
    }

    /// Offset override to add to the displayed offset while dragging
    ///
    /// Zero translation falls back to the last released offset so a
    /// cancelled drag stays put until its snap-back completes.
    pub fn live_offset(&self, appear_from: AppearFrom) -> Size {
        let translation = self.state.translation();
        if translation == Size::ZERO {
            return self.last_offset;
        }

        let axis = appear_from.axis_component(Point::new(translation.width, translation.height));
        if axis * appear_from.dismiss_sign() <= 0.0 {
            return Size::ZERO;
        }
        match appear_from {
            AppearFrom::Top | AppearFrom::Bottom => Size::new(0.0, axis),
            AppearFrom::Left | AppearFrom::Right => Size::new(axis, 0.0),
        }
    }

    /// Interpret the gesture end; must only be called while dragging
    ///
    /// On cancel the released offset is recorded as [`last_offset`] and
    /// stays there until [`settled`] reports the snap-back finished.
    ///
    /// [`last_offset`]: Self::last_offset
    /// [`settled`]: Self::settled
    pub fn end(
        &mut self,
        dx: f32,
        dy: f32,
        content: Size,
        appear_from: AppearFrom,
    ) -> DragOutcome {
        self.state = DragState::Inactive;

        let sign = appear_from.dismiss_sign();
        let axis = appear_from.axis_component(Point::new(dx, dy));
        let extent = match appear_from {
            AppearFrom::Top | AppearFrom::Bottom => content.height,
            AppearFrom::Left | AppearFrom::Right => content.width,
        };

        if axis * sign > 0.0 {
            self.last_offset = match appear_from {
                AppearFrom::Top | AppearFrom::Bottom => Size::new(0.0, axis),
                AppearFrom::Left | AppearFrom::Right => Size::new(axis, 0.0),
            };
        }

        if axis * sign > extent / 3.0 {
            DragOutcome::Commit
        } else {
            DragOutcome::Cancel
        }
    }

    /// The cancel snap-back finished; forget the released offset
    pub fn settled(&mut self) {
        self.last_offset = Size::ZERO;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
