//! Fade and remove flash messages after a fixed delay.

use crate::core::flash::FlashTimings;
use crate::core::markers::FLASH_MESSAGE_CLASS;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

/// Schedule every flash message on the page for dismissal.
pub(crate) fn install(document: &Document, timings: FlashTimings) {
    let Ok(messages) = document.query_selector_all(&format!(".{FLASH_MESSAGE_CLASS}")) else {
        return;
    };
    for index in 0..messages.length() {
        let Some(node) = messages.get(index) else {
            continue;
        };
        let Ok(message) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        schedule_dismiss(message, timings);
    }
}

fn schedule_dismiss(message: HtmlElement, timings: FlashTimings) {
    spawn_local(async move {
        TimeoutFuture::new(timings.visible_ms).await;

        let style = message.style();
        let _ = style.set_property("transition", &timings.fade_transition());
        let _ = style.set_property("opacity", "0");

        TimeoutFuture::new(timings.fade_ms).await;
        // The message may have been dismissed by other means meanwhile.
        if message.parent_element().is_some() {
            message.remove();
        }
    });
}
