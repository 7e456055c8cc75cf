//! Test support: a host adapter that records every call it receives
//!
//! Used by the engine's own tests and by integration tests to assert on
//! the exact sequence of host interactions without a real renderer.

use std::sync::{Arc, Mutex};

use popkit_core::animation::AnimationSpec;
use popkit_core::geometry::Point;
use popkit_core::types::DismissSource;

use crate::host::{AnimationToken, PopupHost};

/// One recorded host interaction
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    RenderOffset(Point),
    AnimateTo(Point, AnimationToken),
    PositionCalculated,
    AnimationCompleted,
    WillDismiss(DismissSource),
    DidDismiss(DismissSource),
    ClearIntent,
}

/// Shared view of the recorded call sequence
pub type SharedCalls = Arc<Mutex<Vec<HostCall>>>;

/// Host adapter that appends every interaction to a shared log
pub struct RecordingHost {
    calls: SharedCalls,
    drag: bool,
}

impl RecordingHost {
    pub fn new() -> (Self, SharedCalls) {
        let calls: SharedCalls = Arc::default();
        let host = Self {
            calls: Arc::clone(&calls),
            drag: true,
        };
        (host, calls)
    }

    /// A host on a platform without drag gestures
    pub fn without_drag() -> (Self, SharedCalls) {
        let (mut host, calls) = Self::new();
        host.drag = false;
        (host, calls)
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl PopupHost for RecordingHost {
    fn render_offset(&mut self, offset: Point) {
        self.record(HostCall::RenderOffset(offset));
    }

    fn animate_to(&mut self, target: Point, _spec: AnimationSpec, token: AnimationToken) {
        self.record(HostCall::AnimateTo(target, token));
    }

    fn position_calculated(&mut self) {
        self.record(HostCall::PositionCalculated);
    }

    fn animation_completed(&mut self) {
        self.record(HostCall::AnimationCompleted);
    }

    fn will_dismiss(&mut self, source: DismissSource) {
        self.record(HostCall::WillDismiss(source));
    }

    fn did_dismiss(&mut self, source: DismissSource) {
        self.record(HostCall::DidDismiss(source));
    }

    fn clear_presentation_intent(&mut self) {
        self.record(HostCall::ClearIntent);
    }

    fn supports_drag(&self) -> bool {
        self.drag
    }
}

/// Latest `animate_to` request in the log, if any
pub fn last_animation(calls: &SharedCalls) -> Option<(Point, AnimationToken)> {
    calls.lock().unwrap().iter().rev().find_map(|call| match call {
        HostCall::AnimateTo(target, token) => Some((*target, *token)),
        _ => None,
    })
}
