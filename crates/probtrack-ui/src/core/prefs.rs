//! Preference persistence seam for the view toggle.

use crate::core::view::ViewMode;
use std::cell::RefCell;
use std::rc::Rc;

/// Where the chosen view mode is remembered between page loads.
///
/// The browser build persists through `localStorage`; native tests use
/// [`MemoryViewStore`].
pub trait ViewStore {
    /// Last persisted mode, if any valid one exists.
    #[must_use]
    fn load(&self) -> Option<ViewMode>;

    /// Persist `mode` as the new preference.
    fn save(&self, mode: ViewMode);
}

/// In-memory [`ViewStore`] for native tests; clones share one slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryViewStore {
    value: Rc<RefCell<Option<ViewMode>>>,
}

impl ViewStore for MemoryViewStore {
    fn load(&self) -> Option<ViewMode> {
        *self.value.borrow()
    }

    fn save(&self, mode: ViewMode) {
        *self.value.borrow_mut() = Some(mode);
    }
}
