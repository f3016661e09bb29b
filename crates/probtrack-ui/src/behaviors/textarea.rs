//! Grow textareas to fit their content as the user types.

use crate::core::logic::px;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlTextAreaElement};

/// Wire every textarea on the page for content-driven height.
///
/// Prefilled areas are sized immediately by replaying an `input` event
/// through the same listener that handles typing.
pub(crate) fn install(document: &Document) {
    let Ok(areas) = document.query_selector_all("textarea") else {
        return;
    };
    for index in 0..areas.length() {
        let Some(node) = areas.get(index) else {
            continue;
        };
        let Ok(area) = node.dyn_into::<HtmlTextAreaElement>() else {
            continue;
        };

        let sized = area.clone();
        EventListener::new(&area, "input", move |_event| {
            resize_to_content(&sized);
        })
        .forget();

        if !area.value().is_empty()
            && let Ok(event) = Event::new("input")
        {
            let _ = area.dispatch_event(&event);
        }
    }
}

fn resize_to_content(area: &HtmlTextAreaElement) {
    let style = area.style();
    // Collapse first so scroll_height reflects the content alone.
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &px(area.scroll_height()));
}
