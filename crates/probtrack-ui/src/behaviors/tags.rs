//! Keep Enter from submitting the form around the tag input.

use crate::core::logic::suppresses_form_submit;
use crate::core::markers::NEW_TAGS_INPUT_ID;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

/// Guard the tag input so Enter stays a no-op instead of submitting.
pub(crate) fn install(document: &Document) {
    let Some(input) = document.get_element_by_id(NEW_TAGS_INPUT_ID) else {
        return;
    };
    EventListener::new(&input, "keydown", move |event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>()
            && suppresses_form_submit(&key_event.key())
        {
            key_event.prevent_default();
        }
    })
    .forget();
}
