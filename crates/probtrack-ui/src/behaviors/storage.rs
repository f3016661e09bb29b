//! `localStorage`-backed persistence for the view preference.

use crate::core::markers::VIEW_PREFERENCE_KEY;
use crate::core::prefs::ViewStore;
use crate::core::view::ViewMode;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// [`ViewStore`] backed by the browser's `localStorage`.
///
/// Values are the bare mode strings (`"block"` / `"table"`) under
/// [`VIEW_PREFERENCE_KEY`], not JSON-encoded.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LocalPrefs;

impl ViewStore for LocalPrefs {
    fn load(&self) -> Option<ViewMode> {
        LocalStorage::raw()
            .get_item(VIEW_PREFERENCE_KEY)
            .ok()
            .flatten()
            .and_then(|value| ViewMode::from_stored(&value))
    }

    fn save(&self, mode: ViewMode) {
        if let Err(err) = LocalStorage::raw().set_item(VIEW_PREFERENCE_KEY, mode.as_str()) {
            console::error!("failed to persist view preference", err);
        }
    }
}
