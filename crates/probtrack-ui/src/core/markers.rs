//! Host-page contract: the ids, marker classes, and storage key the bundle
//! looks for. These literals are shared with the server templates and must
//! not drift.

/// Id of the comma-separated tag input on the problem forms.
pub const NEW_TAGS_INPUT_ID: &str = "new_tags";

/// Marker class on transient server-flash notifications.
pub const FLASH_MESSAGE_CLASS: &str = "flash-message";

/// Marker class on forms that perform irreversible deletes.
pub const DELETE_FORM_CLASS: &str = "delete-form";

/// Class applied to whichever view control is currently selected.
pub const ACTIVE_CLASS: &str = "active";

/// Id of the block-view control on the problems listing.
pub const BLOCK_VIEW_BUTTON_ID: &str = "blockView";

/// Id of the table-view control on the problems listing.
pub const TABLE_VIEW_BUTTON_ID: &str = "tableView";

/// Id of the container holding the block (card) rendering.
pub const BLOCK_VIEW_CONTAINER_ID: &str = "blockViewContainer";

/// Id of the container holding the table rendering.
pub const TABLE_VIEW_CONTAINER_ID: &str = "tableViewContainer";

/// `localStorage` key the view preference is persisted under.
pub const VIEW_PREFERENCE_KEY: &str = "problemsView";
