//! Ask for confirmation before a delete form submits.

use crate::core::markers::DELETE_FORM_CLASS;
use gloo::dialogs;
use gloo::events::EventListener;
use web_sys::Document;

const CONFIRM_PROMPT: &str =
    "Are you sure you want to delete this item? This action cannot be undone.";

/// Intercept submission of every form marked for deletion.
pub(crate) fn install(document: &Document) {
    let Ok(forms) = document.query_selector_all(&format!(".{DELETE_FORM_CLASS}")) else {
        return;
    };
    for index in 0..forms.length() {
        let Some(form) = forms.get(index) else {
            continue;
        };
        EventListener::new(&form, "submit", |event| {
            if !dialogs::confirm(CONFIRM_PROMPT) {
                event.prevent_default();
            }
        })
        .forget();
    }
}
