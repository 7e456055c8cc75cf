//! Lifecycle dispatch: exactly-once will/did dismiss and intent clearing
//!
//! Dismissal notifications go to two places: the host adapter and the
//! optional callbacks carried by the parameters. Both must see
//! `will_dismiss` exactly once per dismissal attempt and `did_dismiss`
//! exactly once per teardown, even when completions arrive twice or the
//! host races the engine on clearing the bound intent value.

use popkit_core::params::{DismissCallback, PopupParameters};
use popkit_core::types::DismissSource;

use crate::host::PopupHost;

/// Tracks one dismissal attempt's notification state
#[derive(Default)]
pub struct LifecycleDispatcher {
    will_fired: bool,
    did_fired: bool,
    intent_cleared: bool,
    will_callback: Option<DismissCallback>,
    dismissed_callback: Option<DismissCallback>,
}

impl LifecycleDispatcher {
    pub fn new(params: &PopupParameters) -> Self {
        Self {
            will_fired: false,
            did_fired: false,
            intent_cleared: false,
            will_callback: params.will_dismiss.clone(),
            dismissed_callback: params.dismissed.clone(),
        }
    }

    /// The dismissal is starting; fires before any hide animation request
    pub fn begin_dismissal(&mut self, host: &mut dyn PopupHost, source: DismissSource) {
        if self.will_fired {
            tracing::warn!(?source, "duplicate will_dismiss suppressed");
            return;
        }
        self.will_fired = true;
        host.will_dismiss(source);
        if let Some(callback) = &self.will_callback {
            callback(source);
        }
    }

    /// Teardown completed; also clears the host's bound intent value
    pub fn finish_dismissal(&mut self, host: &mut dyn PopupHost, source: DismissSource) {
        if self.did_fired {
            tracing::warn!(?source, "duplicate did_dismiss suppressed");
            return;
        }
        self.did_fired = true;
        host.did_dismiss(source);
        if let Some(callback) = &self.dismissed_callback {
            callback(source);
        }
        self.clear_intent(host);
    }

    /// Idempotent: redundant resets are no-ops
    pub fn clear_intent(&mut self, host: &mut dyn PopupHost) {
        if self.intent_cleared {
            return;
        }
        self.intent_cleared = true;
        host.clear_presentation_intent();
    }

    /// Re-arm for the next dismissal attempt (fresh show or take-back)
    pub fn rearm(&mut self) {
        self.will_fired = false;
        self.did_fired = false;
        self.intent_cleared = false;
    }
}
