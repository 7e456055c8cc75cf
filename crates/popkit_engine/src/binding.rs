//! Item-keyed presentation binding
//!
//! Hosts that present a popup per optional item (rather than a plain
//! bool) bind the item through [`ItemBinding`]. It owns an
//! [`ItemIntent`] and translates item changes into presentation intent
//! for one attached popup: item appears, show; item removed, hide. The
//! last item stays readable through the hide animation so the content
//! remains renderable, and is released by [`sync`](ItemBinding::sync)
//! once teardown has finished.

use popkit_core::intent::{IntentChange, ItemIntent};

use crate::registry::{PopupHandle, PopupManager, PopupManagerExt};

/// Binds an optional item to one popup's presentation intent
pub struct ItemBinding<T> {
    manager: PopupManager,
    handle: PopupHandle,
    intent: ItemIntent<T>,
}

impl<T: Clone + PartialEq> ItemBinding<T> {
    pub fn new(manager: PopupManager, handle: PopupHandle) -> Self {
        Self {
            manager,
            handle,
            intent: ItemIntent::new(),
        }
    }

    pub fn handle(&self) -> PopupHandle {
        self.handle
    }

    /// Apply a new bound value and forward the derived intent
    pub fn set_item(&mut self, item: Option<T>) -> IntentChange {
        let change = self.intent.set(item);
        match change {
            IntentChange::Shown => self.manager.set_presentation_intent(self.handle, true),
            IntentChange::Dismissed => self.manager.set_presentation_intent(self.handle, false),
            // content swap or no-op; the popup stays where it is
            IntentChange::Replaced | IntentChange::Unchanged => {}
        }
        change
    }

    /// The item to render, retained through the hide animation
    pub fn item(&self) -> Option<&T> {
        self.intent.item()
    }

    /// Release the retained item once the popup is fully hidden
    ///
    /// Call after animation completions (the natural spot is the host's
    /// `clear_presentation_intent` turnaround). Safe to call any time: a
    /// presented or still-animating popup keeps its item.
    pub fn sync(&mut self) {
        let hidden = matches!(self.manager.is_rendered(self.handle), Ok(false) | Err(_));
        if hidden {
            self.intent.clear();
        }
    }
}
