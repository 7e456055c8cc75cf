//! Item-keyed presentation intent
//!
//! The bool-driven engine input covers `isPresented`-style hosts. Hosts
//! that bind an optional item instead use [`ItemIntent`] to re-derive the
//! bool: item present means show. The last item is retained through the
//! hide animation so the content stays renderable until teardown, then
//! released with [`ItemIntent::clear`].

/// How a newly bound item value changed the presentation intent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntentChange {
    /// No item before, item now: show
    Shown,
    /// A different item while presented: keep showing, swap content
    Replaced,
    /// Item removed while presented: hide
    Dismissed,
    /// Same item, or still absent
    Unchanged,
}

/// Tracks an optional bound item and derives presentation intent from it
#[derive(Clone, Debug, Default)]
pub struct ItemIntent<T> {
    item: Option<T>,
    present: bool,
}

impl<T: Clone + PartialEq> ItemIntent<T> {
    pub fn new() -> Self {
        Self {
            item: None,
            present: false,
        }
    }

    /// Apply a new bound value, reporting what it means for presentation
    pub fn set(&mut self, item: Option<T>) -> IntentChange {
        match item {
            Some(new) => {
                let change = if !self.present {
                    IntentChange::Shown
                } else if self.item.as_ref() == Some(&new) {
                    IntentChange::Unchanged
                } else {
                    IntentChange::Replaced
                };
                self.item = Some(new);
                self.present = true;
                change
            }
            None => {
                if self.present {
                    self.present = false;
                    // item retained for the hide animation
                    IntentChange::Dismissed
                } else {
                    IntentChange::Unchanged
                }
            }
        }
    }

    /// Whether the host currently wants the popup shown
    pub fn should_show(&self) -> bool {
        self.present
    }

    /// The item to render: the bound one, or the retained one while the
    /// hide animation plays
    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    /// Release the retained item once teardown has completed
    pub fn clear(&mut self) {
        if !self.present {
            self.item = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_drives_intent() {
        let mut intent = ItemIntent::new();
        assert!(!intent.should_show());

        assert_eq!(intent.set(Some("a")), IntentChange::Shown);
        assert!(intent.should_show());
        assert_eq!(intent.set(Some("a")), IntentChange::Unchanged);
        assert_eq!(intent.set(Some("b")), IntentChange::Replaced);
        assert_eq!(intent.set(None), IntentChange::Dismissed);
        assert!(!intent.should_show());
        assert_eq!(intent.set(None), IntentChange::Unchanged);
    }

    #[test]
    fn item_retained_until_cleared() {
        let mut intent = ItemIntent::new();
        intent.set(Some(7));
        intent.set(None);
        // still renderable while the hide animation plays
        assert_eq!(intent.item(), Some(&7));
        intent.clear();
        assert_eq!(intent.item(), None);
    }

    #[test]
    fn clear_while_presented_keeps_item() {
        let mut intent = ItemIntent::new();
        intent.set(Some(1));
        intent.clear();
        assert_eq!(intent.item(), Some(&1));
    }
}
