//! Pure helpers shared by the DOM wiring and its native tests.

/// Render a pixel length for an inline style value.
#[must_use]
pub fn px(value: i32) -> String {
    format!("{value}px")
}

/// Whether a keydown on the tag input should be stopped from submitting
/// the surrounding form.
#[must_use]
pub fn suppresses_form_submit(key: &str) -> bool {
    key == "Enter"
}
