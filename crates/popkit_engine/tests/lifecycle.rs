//! End-to-end lifecycle scenarios through the shared manager surface

use popkit_core::geometry::{Point, Rect};
use popkit_core::params::PopupParameters;
use popkit_core::types::{DismissSource, Position};
use popkit_engine::registry::{popup_manager, PopupHandle, PopupManager, PopupManagerExt};
use popkit_engine::testing::{last_animation, HostCall, RecordingHost, SharedCalls};
use popkit_engine::{PopupError, PopupState};

const CONTAINER: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);
const CONTENT: Rect = Rect::new(0.0, 0.0, 400.0, 100.0);

fn attach_measured(manager: &PopupManager, params: PopupParameters) -> (PopupHandle, SharedCalls) {
    let (host, calls) = RecordingHost::new();
    let handle = manager.attach(params, Box::new(host));
    manager.report_container_rect(handle, CONTAINER);
    manager.report_content_rect(handle, CONTENT);
    (handle, calls)
}

fn complete(manager: &PopupManager, handle: PopupHandle, calls: &SharedCalls) {
    let (_, token) = last_animation(calls).expect("an animation was requested");
    manager.notify_animation_complete(handle, token);
}

fn count(calls: &SharedCalls, predicate: impl Fn(&HostCall) -> bool) -> usize {
    calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
}

#[test]
fn show_then_hide_runs_the_full_lifecycle() {
    let manager = popup_manager();
    let (handle, calls) =
        attach_measured(&manager, PopupParameters::new().position(Position::Bottom));

    manager.set_presentation_intent(handle, true);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Appearing));
    complete(&manager, handle, &calls);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Shown));
    assert_eq!(manager.current_offset(handle), Ok(Point::new(0.0, 700.0)));

    manager.set_presentation_intent(handle, false);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Disappearing));
    complete(&manager, handle, &calls);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Hidden));

    let recorded = calls.lock().unwrap().clone();
    let index_of = |needle: &HostCall| recorded.iter().position(|c| c == needle).unwrap();
    let will = index_of(&HostCall::WillDismiss(DismissSource::ExplicitStateChange));
    let did = index_of(&HostCall::DidDismiss(DismissSource::ExplicitStateChange));
    let cleared = index_of(&HostCall::ClearIntent);
    assert!(will < did && did < cleared);
}

#[test]
fn rapid_intent_toggling_settles_on_the_last_intent() {
    let manager = popup_manager();
    let (handle, calls) =
        attach_measured(&manager, PopupParameters::new().position(Position::Bottom));

    manager.set_presentation_intent(handle, true);
    complete(&manager, handle, &calls);

    // true -> false -> true before the hide finishes
    manager.set_presentation_intent(handle, false);
    let (_, hide_token) = last_animation(&calls).unwrap();
    manager.set_presentation_intent(handle, true);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Appearing));

    // the superseded hide completion arrives late and is dropped
    manager.notify_animation_complete(handle, hide_token);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Appearing));
    assert_eq!(manager.is_rendered(handle), Ok(true));

    complete(&manager, handle, &calls);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Shown));
    assert_eq!(count(&calls, |c| matches!(c, HostCall::DidDismiss(_))), 0);
}

#[test]
fn drag_past_threshold_dismisses_with_drag_source() {
    let manager = popup_manager();
    let (handle, calls) =
        attach_measured(&manager, PopupParameters::new().position(Position::Bottom));
    manager.set_presentation_intent(handle, true);
    complete(&manager, handle, &calls);

    manager.report_drag_delta(handle, 0.0, 10.0);
    manager.report_drag_delta(handle, 0.0, 45.0);
    manager.report_drag_ended(handle, 0.0, 45.0); // content height 100, threshold 33.3

    assert_eq!(manager.state_of(handle), Ok(PopupState::Disappearing));
    complete(&manager, handle, &calls);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Hidden));
    assert_eq!(
        count(&calls, |c| *c == HostCall::WillDismiss(DismissSource::Drag)),
        1
    );
    assert_eq!(
        count(&calls, |c| *c == HostCall::DidDismiss(DismissSource::Drag)),
        1
    );
}

#[test]
fn drag_short_of_threshold_snaps_back_and_stays_shown() {
    let manager = popup_manager();
    let (handle, calls) =
        attach_measured(&manager, PopupParameters::new().position(Position::Bottom));
    manager.set_presentation_intent(handle, true);
    complete(&manager, handle, &calls);

    manager.report_drag_delta(handle, 0.0, 25.0);
    manager.report_drag_ended(handle, 0.0, 25.0);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Shown));

    // snap-back targets the resting offset and fires no lifecycle events
    let (target, token) = last_animation(&calls).unwrap();
    assert_eq!(target, Point::new(0.0, 700.0));
    let completed_before = count(&calls, |c| *c == HostCall::AnimationCompleted);
    manager.notify_animation_complete(handle, token);
    assert_eq!(
        count(&calls, |c| *c == HostCall::AnimationCompleted),
        completed_before
    );
    assert_eq!(count(&calls, |c| matches!(c, HostCall::WillDismiss(_))), 0);
}

#[test]
fn drag_released_during_slide_in_still_completes_the_show() {
    let manager = popup_manager();
    let (handle, calls) = attach_measured(
        &manager,
        PopupParameters::new()
            .position(Position::Bottom)
            .autohide_ms(Some(2000)),
    );
    manager.set_presentation_intent(handle, true);

    // sub-threshold release while the popup is still appearing
    manager.report_drag_delta(handle, 0.0, 10.0);
    manager.report_drag_ended(handle, 0.0, 10.0);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Appearing));

    complete(&manager, handle, &calls);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Shown));
    assert_eq!(count(&calls, |c| *c == HostCall::AnimationCompleted), 1);

    // autohide still runs from the settled show
    manager.tick(10_000);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Disappearing));
    assert_eq!(
        count(&calls, |c| *c == HostCall::WillDismiss(DismissSource::Autohide)),
        1
    );
}

#[test]
fn drags_are_ignored_when_the_host_lacks_gestures() {
    let manager = popup_manager();
    let (host, calls) = RecordingHost::without_drag();
    let handle = manager.attach(
        PopupParameters::new().position(Position::Bottom),
        Box::new(host),
    );
    manager.report_container_rect(handle, CONTAINER);
    manager.report_content_rect(handle, CONTENT);
    manager.set_presentation_intent(handle, true);
    complete(&manager, handle, &calls);

    let before = calls.lock().unwrap().len();
    manager.report_drag_delta(handle, 0.0, 300.0);
    manager.report_drag_ended(handle, 0.0, 300.0);
    assert_eq!(calls.lock().unwrap().len(), before);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Shown));
}

#[test]
fn autohide_fires_once_and_rearms_on_reshow() {
    let manager = popup_manager();
    let (handle, calls) = attach_measured(
        &manager,
        PopupParameters::new()
            .position(Position::Bottom)
            .autohide_ms(Some(2000)),
    );

    manager.set_presentation_intent(handle, true);
    complete(&manager, handle, &calls); // shown at t=0
    manager.tick(1000);
    manager.tick(3000);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Disappearing));
    complete(&manager, handle, &calls);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Hidden));
    assert_eq!(
        count(&calls, |c| *c == HostCall::DidDismiss(DismissSource::Autohide)),
        1
    );

    // a later show arms a fresh deadline from the current time
    manager.tick(10_000);
    manager.set_presentation_intent(handle, true);
    complete(&manager, handle, &calls); // shown at t=10_000
    manager.tick(11_999);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Shown));
    manager.tick(12_000);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Disappearing));
}

#[test]
fn tap_dismissals_report_their_source() {
    let manager = popup_manager();
    let (handle, calls) = attach_measured(
        &manager,
        PopupParameters::new()
            .position(Position::Bottom)
            .close_on_tap_outside(true),
    );
    manager.set_presentation_intent(handle, true);
    complete(&manager, handle, &calls);

    manager.report_tap_outside(handle);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Disappearing));
    complete(&manager, handle, &calls);
    assert_eq!(
        count(&calls, |c| *c == HostCall::DidDismiss(DismissSource::TapOutside)),
        1
    );
}

#[test]
fn show_before_layout_waits_then_slides_in() {
    let manager = popup_manager();
    let (host, calls) = RecordingHost::new();
    let handle = manager.attach(
        PopupParameters::new().position(Position::Bottom),
        Box::new(host),
    );

    manager.set_presentation_intent(handle, true);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Appearing));
    assert_eq!(manager.current_offset(handle), Ok(Point::FAR_OFFSCREEN));
    assert!(last_animation(&calls).is_none());

    manager.report_container_rect(handle, CONTAINER);
    manager.report_content_rect(handle, CONTENT);
    let (target, _) = last_animation(&calls).unwrap();
    assert_eq!(target, Point::new(0.0, 700.0));
    assert_eq!(count(&calls, |c| *c == HostCall::PositionCalculated), 1);
}

#[test]
fn never_measured_popup_still_dismisses_cleanly() {
    let manager = popup_manager();
    let (host, calls) = RecordingHost::new();
    let handle = manager.attach(PopupParameters::new(), Box::new(host));

    manager.set_presentation_intent(handle, true);
    manager.set_presentation_intent(handle, false);
    assert_eq!(manager.state_of(handle), Ok(PopupState::Hidden));
    assert_eq!(count(&calls, |c| matches!(c, HostCall::WillDismiss(_))), 1);
    assert_eq!(count(&calls, |c| matches!(c, HostCall::DidDismiss(_))), 1);
    assert_eq!(count(&calls, |c| *c == HostCall::ClearIntent), 1);
}

#[test]
fn detached_handles_drop_feeds_and_fail_queries() {
    let manager = popup_manager();
    let (handle, _calls) =
        attach_measured(&manager, PopupParameters::new().position(Position::Bottom));
    manager.detach(handle).unwrap();

    // feeds aimed at the stale handle are dropped without panicking
    manager.set_presentation_intent(handle, true);
    manager.report_drag_delta(handle, 0.0, 50.0);
    manager.tick(1000);

    assert_eq!(manager.state_of(handle), Err(PopupError::Detached(handle)));
    assert_eq!(manager.is_rendered(handle), Err(PopupError::Detached(handle)));
    assert_eq!(manager.detach(handle), Err(PopupError::Detached(handle)));
}

#[test]
fn independent_popups_do_not_interfere() {
    let manager = popup_manager();
    let (toast, toast_calls) = attach_measured(
        &manager,
        PopupParameters::new()
            .position(Position::Top)
            .autohide_ms(Some(1000)),
    );
    let (sheet, sheet_calls) =
        attach_measured(&manager, PopupParameters::new().position(Position::Bottom));

    manager.set_presentation_intent(toast, true);
    manager.set_presentation_intent(sheet, true);
    complete(&manager, toast, &toast_calls);
    complete(&manager, sheet, &sheet_calls);

    manager.tick(0);
    manager.tick(1000);
    assert_eq!(manager.state_of(toast), Ok(PopupState::Disappearing));
    assert_eq!(manager.state_of(sheet), Ok(PopupState::Shown));

    complete(&manager, toast, &toast_calls);
    assert_eq!(manager.state_of(toast), Ok(PopupState::Hidden));
    assert!(manager.has_rendered_popups());
    assert_eq!(count(&sheet_calls, |c| matches!(c, HostCall::WillDismiss(_))), 0);
}
