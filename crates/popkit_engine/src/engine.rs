//! The popup presentation engine
//!
//! One [`PopupEngine`] owns the lifecycle of a single popup attachment:
//! it caches the measured geometry, sequences
//! Hidden -> Appearing -> Shown -> Disappearing, interprets drag
//! gestures, expires the autohide deadline, and talks to the renderer
//! exclusively through a [`PopupHost`] adapter.
//!
//! All inputs arrive on one designated UI thread, in arrival order.
//! Animation completions are guarded by a generation token: every
//! `animate_to` request supersedes the previous one, and a completion
//! carrying anything but the newest token is dropped. This is what makes
//! rapid intent toggling during an in-flight hide safe.

use popkit_core::geometry::{EdgeInsets, MeasuredGeometry, Point, Rect};
use popkit_core::offset::{self, PopupLayout};
use popkit_core::params::PopupParameters;
use popkit_core::types::DismissSource;

use crate::dispatcher::LifecycleDispatcher;
use crate::drag::{DragInterpreter, DragOutcome};
use crate::host::{AnimationToken, PopupHost};
use crate::state::{popup_events, PopupState, StateTransitions};

/// Presentation engine for a single popup attachment
pub struct PopupEngine {
    params: PopupParameters,
    layout: PopupLayout,
    geometry: MeasuredGeometry,
    state: PopupState,
    /// Latest requested or settled offset target
    current_offset: Point,
    drag: DragInterpreter,
    dispatcher: LifecycleDispatcher,
    host: Box<dyn PopupHost>,
    token_seq: u64,
    /// Newest outstanding animation request; older completions are stale
    active_token: Option<AnimationToken>,
    /// Set while the outstanding animation is a drag-cancel snap-back
    settle_token: Option<AnimationToken>,
    /// Cause of the in-flight dismissal, if any
    pending_dismiss: Option<DismissSource>,
    /// `position_calculated` already announced for the current layout
    position_reported: bool,
    /// Armed on Shown entry, fires via [`tick`](Self::tick)
    shown_at_ms: Option<u64>,
    current_time_ms: u64,
}

impl PopupEngine {
    /// Create an engine for one attachment; the parameters are immutable
    /// for its whole lifetime (reconfiguring means detach + reattach)
    pub fn new(params: PopupParameters, host: Box<dyn PopupHost>) -> Self {
        let layout = PopupLayout::from_params(&params);
        let dispatcher = LifecycleDispatcher::new(&params);
        Self {
            params,
            layout,
            geometry: MeasuredGeometry::new(),
            state: PopupState::Hidden,
            current_offset: Point::FAR_OFFSCREEN,
            drag: DragInterpreter::new(),
            dispatcher,
            host,
            token_seq: 0,
            active_token: None,
            settle_token: None,
            pending_dismiss: None,
            position_reported: false,
            shown_at_ms: None,
            current_time_ms: 0,
        }
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    /// Content is attached; stays true until the hide animation completes
    pub fn is_rendered(&self) -> bool {
        self.state.is_rendered()
    }

    pub fn current_offset(&self) -> Point {
        self.current_offset
    }

    pub fn params(&self) -> &PopupParameters {
        &self.params
    }

    // ---------------------------------------------------------------
    // Presentation intent
    // ---------------------------------------------------------------

    pub fn set_presentation_intent(&mut self, show: bool) {
        if show {
            self.show();
        } else {
            self.request_dismiss(DismissSource::ExplicitStateChange);
        }
    }

    fn show(&mut self) {
        let Some(next) = self.state.on_event(popup_events::SHOW) else {
            tracing::debug!(state = ?self.state, "show request ignored");
            return;
        };
        let taking_back = self.state == PopupState::Disappearing;
        if taking_back {
            tracing::debug!("taking back in-flight dismissal");
        }
        self.state = next;
        self.pending_dismiss = None;
        self.dispatcher.rearm();
        self.position_reported = false;

        if self.geometry.is_ready() {
            if !taking_back {
                // start the slide at the matching edge
                self.snap_to_hidden();
            }
            self.report_position_calculated();
            let target = offset::displayed_offset(&self.layout, &self.geometry);
            self.request_animation(target);
        } else {
            // unmeasured: park at the sentinel, no animation, and wait
            // for the layout feeds
            self.snap_to_hidden();
        }
    }

    /// Start a dismissal; `source` tags the cause for host callbacks
    pub fn request_dismiss(&mut self, source: DismissSource) {
        let Some(next) = self.state.on_event(popup_events::DISMISS) else {
            tracing::debug!(?source, state = ?self.state, "dismiss request ignored");
            return;
        };
        self.state = next;
        self.pending_dismiss = Some(source);
        self.shown_at_ms = None;
        self.dispatcher.begin_dismissal(&mut *self.host, source);

        if self.geometry.is_ready() {
            let target = offset::hidden_offset(&self.layout, &self.geometry);
            self.request_animation(target);
        } else {
            // geometry never became ready: instant dismissal, but the
            // lifecycle still runs in order
            self.current_offset = Point::FAR_OFFSCREEN;
            self.active_token = None;
            self.host.render_offset(self.current_offset);
            self.finish_teardown();
        }
    }

    // ---------------------------------------------------------------
    // Measurement feeds
    // ---------------------------------------------------------------

    pub fn report_container_rect(&mut self, rect: Rect) {
        self.geometry.container = rect;
        self.geometry_changed();
    }

    pub fn report_content_rect(&mut self, rect: Rect) {
        let resized = rect.size != self.geometry.content.size;
        self.geometry.content = rect;
        if resized && !rect.size.is_empty() && self.state.is_rendered() {
            // content was (re)measured: announce the new position
            self.position_reported = false;
        }
        self.geometry_changed();
    }

    pub fn report_safe_area_insets(&mut self, insets: EdgeInsets) {
        self.geometry.safe_area = insets;
        self.geometry_changed();
    }

    pub fn report_keyboard_height(&mut self, height: f32) {
        self.geometry.keyboard_height = height;
        self.geometry_changed();
    }

    pub fn report_screen_size(&mut self, size: popkit_core::geometry::Size) {
        self.geometry.screen = size;
        self.geometry_changed();
    }

    fn geometry_changed(&mut self) {
        if !self.geometry.is_ready() {
            return;
        }
        match self.state {
            PopupState::Appearing | PopupState::Shown => {
                if !self.position_reported {
                    self.report_position_calculated();
                }
                if self.drag.is_dragging() {
                    return;
                }
                let target = offset::displayed_offset(&self.layout, &self.geometry);
                if target != self.current_offset {
                    if self.current_offset == Point::FAR_OFFSCREEN
                        && self.state == PopupState::Appearing
                    {
                        // first layout after an unmeasured show: place at
                        // the real edge so the slide starts there
                        self.snap_to_hidden();
                    }
                    self.request_animation(target);
                }
            }
            PopupState::Disappearing | PopupState::Hidden => {}
        }
    }

    // ---------------------------------------------------------------
    // Gesture feed
    // ---------------------------------------------------------------

    pub fn report_drag_delta(&mut self, dx: f32, dy: f32) {
        if !self.accepts_drag() {
            return;
        }
        self.drag.update(dx, dy);
        let live = self.drag.live_offset(self.layout.appear_from);
        let base = offset::displayed_offset(&self.layout, &self.geometry);
        self.host
            .render_offset(Point::new(base.x + live.width, base.y + live.height));
    }

    pub fn report_drag_ended(&mut self, dx: f32, dy: f32) {
        if !self.accepts_drag() {
            return;
        }
        if !self.drag.is_dragging() {
            tracing::debug!("drag end without a preceding drag, treated as no-op cancel");
            return;
        }
        let outcome = self
            .drag
            .end(dx, dy, self.geometry.content.size, self.layout.appear_from);
        match outcome {
            DragOutcome::Commit => self.request_dismiss(DismissSource::Drag),
            DragOutcome::Cancel => {
                if self.geometry.is_ready() {
                    // snap back; the released offset survives until this
                    // settles so an interrupted re-drag stays continuous
                    let target = offset::displayed_offset(&self.layout, &self.geometry);
                    let token = self.request_animation(target);
                    self.settle_token = Some(token);
                } else {
                    self.drag.settled();
                }
            }
        }
    }

    fn accepts_drag(&self) -> bool {
        if !self.params.drag_to_dismiss || !self.host.supports_drag() {
            return false;
        }
        matches!(self.state, PopupState::Appearing | PopupState::Shown)
    }

    // ---------------------------------------------------------------
    // Taps
    // ---------------------------------------------------------------

    pub fn report_tap_inside(&mut self) {
        if self.params.close_on_tap {
            self.request_dismiss(DismissSource::TapInside);
        }
    }

    pub fn report_tap_outside(&mut self) {
        if self.params.close_on_tap_outside {
            self.request_dismiss(DismissSource::TapOutside);
        }
    }

    // ---------------------------------------------------------------
    // Animation completions
    // ---------------------------------------------------------------

    /// Host reports a transition finished; stale tokens are dropped
    pub fn notify_animation_complete(&mut self, token: AnimationToken) {
        if self.active_token != Some(token) {
            tracing::debug!(token = token.raw(), "stale animation completion ignored");
            return;
        }
        self.active_token = None;

        if self.settle_token.take() == Some(token) {
            self.drag.settled();
            // a snap-back while still appearing landed on the displayed
            // offset, so it doubles as the slide-in completion
            if self.state == PopupState::Appearing {
                self.host.animation_completed();
                if let Some(next) = self.state.on_event(popup_events::ANIMATION_COMPLETE) {
                    self.state = next;
                    self.enter_shown();
                }
            }
            return;
        }

        self.host.animation_completed();
        let Some(next) = self.state.on_event(popup_events::ANIMATION_COMPLETE) else {
            // e.g. a reposition while already Shown
            return;
        };
        self.state = next;
        match self.state {
            PopupState::Shown => self.enter_shown(),
            PopupState::Hidden => self.finish_teardown(),
            _ => {}
        }
    }

    // ---------------------------------------------------------------
    // Autohide
    // ---------------------------------------------------------------

    /// Advance engine time; hosts call this every frame (or at least
    /// often enough for autohide accuracy)
    pub fn tick(&mut self, now_ms: u64) {
        self.current_time_ms = now_ms;
        if self.state != PopupState::Shown {
            return;
        }
        if let (Some(delay), Some(shown_at)) = (self.params.autohide_ms, self.shown_at_ms) {
            if now_ms.saturating_sub(shown_at) >= delay {
                tracing::debug!(delay, "autohide deadline reached");
                self.request_dismiss(DismissSource::Autohide);
            }
        }
    }

    // ---------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------

    fn snap_to_hidden(&mut self) {
        self.current_offset = offset::hidden_offset(&self.layout, &self.geometry);
        self.active_token = None;
        self.settle_token = None;
        self.host.render_offset(self.current_offset);
    }

    fn request_animation(&mut self, target: Point) -> AnimationToken {
        if self.settle_token.take().is_some() {
            // the snap-back was superseded; its sticky offset is moot
            self.drag.settled();
        }
        self.token_seq += 1;
        let token = AnimationToken(self.token_seq);
        self.active_token = Some(token);
        self.current_offset = target;
        self.host.animate_to(target, self.params.animation, token);
        token
    }

    fn report_position_calculated(&mut self) {
        self.position_reported = true;
        self.host.position_calculated();
    }

    fn enter_shown(&mut self) {
        if self.params.autohide_ms.is_some() {
            self.shown_at_ms = Some(self.current_time_ms);
        }
        tracing::debug!("popup fully shown");
    }

    fn finish_teardown(&mut self) {
        self.state = PopupState::Hidden;
        self.shown_at_ms = None;
        self.drag.reset();
        self.position_reported = false;
        let source = self
            .pending_dismiss
            .take()
            .unwrap_or(DismissSource::ExplicitStateChange);
        tracing::debug!(?source, "popup torn down");
        self.dispatcher.finish_dismissal(&mut *self.host, source);
    }
}
