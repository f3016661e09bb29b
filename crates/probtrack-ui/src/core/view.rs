//! Block/table view state machine for the problems listing.

use crate::core::prefs::ViewStore;

/// Display mode for the problems listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Card-style block layout, the default for first visits.
    #[default]
    Block,
    /// Compact table layout.
    Table,
}

impl ViewMode {
    /// String form stored under the browser preference key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Table => "table",
        }
    }

    /// Parse a stored preference value; unknown strings count as absent.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "block" => Some(Self::Block),
            "table" => Some(Self::Table),
            _ => None,
        }
    }

    /// Visual outcome of entering this mode.
    #[must_use]
    pub const fn presentation(self) -> ViewPresentation {
        match self {
            Self::Block => ViewPresentation {
                block_control_active: true,
                table_control_active: false,
                block_container_display: "flex",
                table_container_display: "none",
            },
            Self::Table => ViewPresentation {
                block_control_active: false,
                table_control_active: true,
                block_container_display: "none",
                table_container_display: "block",
            },
        }
    }
}

/// Everything the DOM layer applies when a mode is entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewPresentation {
    /// Whether the block-view control carries the active marker.
    pub block_control_active: bool,
    /// Whether the table-view control carries the active marker.
    pub table_control_active: bool,
    /// Inline `display` value for the block container.
    pub block_container_display: &'static str,
    /// Inline `display` value for the table container.
    pub table_container_display: &'static str,
}

/// Two-state toggle that restores from and persists to a [`ViewStore`].
///
/// The store is the only side-effect channel, so the whole transition table
/// runs under native tests with [`MemoryViewStore`].
///
/// [`MemoryViewStore`]: crate::core::prefs::MemoryViewStore
#[derive(Debug)]
pub struct ViewToggle<S> {
    store: S,
    current: ViewMode,
}

impl<S: ViewStore> ViewToggle<S> {
    /// Restore the last persisted mode, defaulting to block view.
    #[must_use]
    pub fn restore(store: S) -> Self {
        let current = store.load().unwrap_or_default();
        Self { store, current }
    }

    /// Mode the toggle is currently in.
    #[must_use]
    pub const fn current(&self) -> ViewMode {
        self.current
    }

    /// Enter `mode`: persist it and report what the page should show.
    pub fn select(&mut self, mode: ViewMode) -> ViewPresentation {
        self.current = mode;
        self.store.save(mode);
        mode.presentation()
    }
}
