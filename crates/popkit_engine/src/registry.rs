//! Popup registry: many attachments, one shared entry point
//!
//! Each attached popup gets its own [`PopupEngine`] keyed by a
//! [`PopupHandle`]. Input feeds aimed at a detached handle are logged and
//! dropped (gesture and layout streams routinely outlive the popup they
//! were aimed at); queries about a detached handle return
//! [`PopupError::Detached`].
//!
//! The shared form is [`PopupManager`], an `Arc<Mutex<PopupRegistry>>`
//! with the [`PopupManagerExt`] convenience surface.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use indexmap::IndexMap;
use smallvec::SmallVec;

use popkit_core::geometry::{EdgeInsets, Point, Rect, Size};
use popkit_core::params::PopupParameters;
use popkit_core::types::DismissSource;

use crate::engine::PopupEngine;
use crate::error::{PopupError, Result};
use crate::host::{AnimationToken, PopupHost};
use crate::state::PopupState;

/// Identifies one attached popup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PopupHandle(u64);

impl PopupHandle {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Owns the engines for every attached popup
pub struct PopupRegistry {
    popups: IndexMap<PopupHandle, PopupEngine>,
    next_id: AtomicU64,
}

impl PopupRegistry {
    pub fn new() -> Self {
        Self {
            popups: IndexMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Attach a popup; it starts Hidden and waits for presentation intent
    pub fn attach(&mut self, params: PopupParameters, host: Box<dyn PopupHost>) -> PopupHandle {
        let handle = PopupHandle(self.next_id.fetch_add(1, Ordering::SeqCst));
        tracing::debug!(?handle, "attaching popup");
        self.popups.insert(handle, PopupEngine::new(params, host));
        handle
    }

    /// Detach immediately, whatever state the popup is in; no dismissal
    /// lifecycle runs for a teardown-by-detach
    pub fn detach(&mut self, handle: PopupHandle) -> Result<()> {
        match self.popups.shift_remove(&handle) {
            Some(_) => {
                tracing::debug!(?handle, "detached popup");
                Ok(())
            }
            None => Err(PopupError::Detached(handle)),
        }
    }

    /// Detach everything, returning how many popups were attached
    pub fn detach_all(&mut self) -> usize {
        let handles: SmallVec<[PopupHandle; 8]> = self.popups.keys().copied().collect();
        for handle in &handles {
            tracing::debug!(handle = ?handle, "detached popup");
        }
        self.popups.clear();
        handles.len()
    }

    fn feed(&mut self, handle: PopupHandle, feed: impl FnOnce(&mut PopupEngine)) {
        match self.popups.get_mut(&handle) {
            Some(engine) => feed(engine),
            None => tracing::warn!(?handle, "input for detached popup dropped"),
        }
    }

    fn query<T>(&self, handle: PopupHandle, query: impl FnOnce(&PopupEngine) -> T) -> Result<T> {
        self.popups
            .get(&handle)
            .map(query)
            .ok_or(PopupError::Detached(handle))
    }

    // ---------------------------------------------------------------
    // Input feeds (detached handles: log and drop)
    // ---------------------------------------------------------------

    pub fn set_presentation_intent(&mut self, handle: PopupHandle, show: bool) {
        self.feed(handle, |engine| engine.set_presentation_intent(show));
    }

    pub fn request_dismiss(&mut self, handle: PopupHandle, source: DismissSource) {
        self.feed(handle, |engine| engine.request_dismiss(source));
    }

    pub fn report_container_rect(&mut self, handle: PopupHandle, rect: Rect) {
        self.feed(handle, |engine| engine.report_container_rect(rect));
    }

    pub fn report_content_rect(&mut self, handle: PopupHandle, rect: Rect) {
        self.feed(handle, |engine| engine.report_content_rect(rect));
    }

    pub fn report_safe_area_insets(&mut self, handle: PopupHandle, insets: EdgeInsets) {
        self.feed(handle, |engine| engine.report_safe_area_insets(insets));
    }

    pub fn report_keyboard_height(&mut self, handle: PopupHandle, height: f32) {
        self.feed(handle, |engine| engine.report_keyboard_height(height));
    }

    pub fn report_screen_size(&mut self, handle: PopupHandle, size: Size) {
        self.feed(handle, |engine| engine.report_screen_size(size));
    }

    pub fn report_drag_delta(&mut self, handle: PopupHandle, dx: f32, dy: f32) {
        self.feed(handle, |engine| engine.report_drag_delta(dx, dy));
    }

    pub fn report_drag_ended(&mut self, handle: PopupHandle, dx: f32, dy: f32) {
        self.feed(handle, |engine| engine.report_drag_ended(dx, dy));
    }

    pub fn report_tap_inside(&mut self, handle: PopupHandle) {
        self.feed(handle, |engine| engine.report_tap_inside());
    }

    pub fn report_tap_outside(&mut self, handle: PopupHandle) {
        self.feed(handle, |engine| engine.report_tap_outside());
    }

    pub fn notify_animation_complete(&mut self, handle: PopupHandle, token: AnimationToken) {
        self.feed(handle, |engine| engine.notify_animation_complete(token));
    }

    /// Advance time for every attached popup (drives autohide)
    pub fn tick(&mut self, now_ms: u64) {
        for engine in self.popups.values_mut() {
            engine.tick(now_ms);
        }
    }

    // ---------------------------------------------------------------
    // Queries (detached handles: error)
    // ---------------------------------------------------------------

    pub fn state_of(&self, handle: PopupHandle) -> Result<PopupState> {
        self.query(handle, |engine| engine.state())
    }

    pub fn is_rendered(&self, handle: PopupHandle) -> Result<bool> {
        self.query(handle, |engine| engine.is_rendered())
    }

    pub fn current_offset(&self, handle: PopupHandle) -> Result<Point> {
        self.query(handle, |engine| engine.current_offset())
    }

    pub fn params_of(&self, handle: PopupHandle) -> Result<PopupParameters> {
        self.query(handle, |engine| engine.params().clone())
    }

    /// Any popup with attached content (including ones mid-animation)
    pub fn has_rendered_popups(&self) -> bool {
        self.popups.values().any(|engine| engine.is_rendered())
    }

    pub fn len(&self) -> usize {
        self.popups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.popups.is_empty()
    }
}

impl Default for PopupRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared, thread-safe registry handle
pub type PopupManager = Arc<Mutex<PopupRegistry>>;

/// Create a fresh shared registry
pub fn popup_manager() -> PopupManager {
    Arc::new(Mutex::new(PopupRegistry::new()))
}

/// Convenience surface over the locked registry
pub trait PopupManagerExt {
    fn attach(&self, params: PopupParameters, host: Box<dyn PopupHost>) -> PopupHandle;
    fn detach(&self, handle: PopupHandle) -> Result<()>;
    fn detach_all(&self) -> usize;
    fn set_presentation_intent(&self, handle: PopupHandle, show: bool);
    fn request_dismiss(&self, handle: PopupHandle, source: DismissSource);
    fn report_container_rect(&self, handle: PopupHandle, rect: Rect);
    fn report_content_rect(&self, handle: PopupHandle, rect: Rect);
    fn report_safe_area_insets(&self, handle: PopupHandle, insets: EdgeInsets);
    fn report_keyboard_height(&self, handle: PopupHandle, height: f32);
    fn report_screen_size(&self, handle: PopupHandle, size: Size);
    fn report_drag_delta(&self, handle: PopupHandle, dx: f32, dy: f32);
    fn report_drag_ended(&self, handle: PopupHandle, dx: f32, dy: f32);
    fn report_tap_inside(&self, handle: PopupHandle);
    fn report_tap_outside(&self, handle: PopupHandle);
    fn notify_animation_complete(&self, handle: PopupHandle, token: AnimationToken);
    fn tick(&self, now_ms: u64);
    fn state_of(&self, handle: PopupHandle) -> Result<PopupState>;
    fn is_rendered(&self, handle: PopupHandle) -> Result<bool>;
    fn current_offset(&self, handle: PopupHandle) -> Result<Point>;
    fn has_rendered_popups(&self) -> bool;
}

impl PopupManagerExt for PopupManager {
    fn attach(&self, params: PopupParameters, host: Box<dyn PopupHost>) -> PopupHandle {
        self.lock().unwrap().attach(params, host)
    }

    fn detach(&self, handle: PopupHandle) -> Result<()> {
        self.lock().unwrap().detach(handle)
    }

    fn detach_all(&self) -> usize {
        self.lock().unwrap().detach_all()
    }

    fn set_presentation_intent(&self, handle: PopupHandle, show: bool) {
        self.lock().unwrap().set_presentation_intent(handle, show);
    }

    fn request_dismiss(&self, handle: PopupHandle, source: DismissSource) {
        self.lock().unwrap().request_dismiss(handle, source);
    }

    fn report_container_rect(&self, handle: PopupHandle, rect: Rect) {
        self.lock().unwrap().report_container_rect(handle, rect);
    }

    fn report_content_rect(&self, handle: PopupHandle, rect: Rect) {
        self.lock().unwrap().report_content_rect(handle, rect);
    }

    fn report_safe_area_insets(&self, handle: PopupHandle, insets: EdgeInsets) {
        self.lock().unwrap().report_safe_area_insets(handle, insets);
    }

    fn report_keyboard_height(&self, handle: PopupHandle, height: f32) {
        self.lock().unwrap().report_keyboard_height(handle, height);
    }

    fn report_screen_size(&self, handle: PopupHandle, size: Size) {
        self.lock().unwrap().report_screen_size(handle, size);
    }

    fn report_drag_delta(&self, handle: PopupHandle, dx: f32, dy: f32) {
        self.lock().unwrap().report_drag_delta(handle, dx, dy);
    }

    fn report_drag_ended(&self, handle: PopupHandle, dx: f32, dy: f32) {
        self.lock().unwrap().report_drag_ended(handle, dx, dy);
    }

    fn report_tap_inside(&self, handle: PopupHandle) {
        self.lock().unwrap().report_tap_inside(handle);
    }

    fn report_tap_outside(&self, handle: PopupHandle) {
        self.lock().unwrap().report_tap_outside(handle);
    }

    fn notify_animation_complete(&self, handle: PopupHandle, token: AnimationToken) {
        self.lock().unwrap().notify_animation_complete(handle, token);
    }

    fn tick(&self, now_ms: u64) {
        self.lock().unwrap().tick(now_ms);
    }

    fn state_of(&self, handle: PopupHandle) -> Result<PopupState> {
        self.lock().unwrap().state_of(handle)
    }

    fn is_rendered(&self, handle: PopupHandle) -> Result<bool> {
        self.lock().unwrap().is_rendered(handle)
    }

    fn current_offset(&self, handle: PopupHandle) -> Result<Point> {
        self.lock().unwrap().current_offset(handle)
    }

    fn has_rendered_popups(&self) -> bool {
        self.lock().unwrap().has_rendered_popups()
    }
}
