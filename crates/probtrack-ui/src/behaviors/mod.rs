//! Browser wiring for the page enhancements.
//!
//! # Design
//!
//! - Each enhancement lives in its own module with a single `install`
//!   entry point, so a page missing the expected markup costs one early
//!   return instead of a panic.
//! - Installation runs once the DOM is parsed; listeners are handed to
//!   the page for its lifetime via [`EventListener::forget`].
//! - Decisions live in [`crate::core`]; these modules only read and
//!   mutate the document.

use crate::core::flash::FlashTimings;
use gloo::events::EventListener;
use gloo::utils::document;
use web_sys::{Document, DocumentReadyState};

mod delete_guard;
mod flash;
mod storage;
mod tags;
mod textarea;
mod view_toggle;

#[cfg(test)]
mod tags_test;
#[cfg(test)]
mod textarea_test;

/// Install every page enhancement, waiting for the DOM when necessary.
///
/// Safe to call on pages that carry none of the expected markup.
pub fn run_enhancements() {
    console_error_panic_hook::set_once();

    let current = document();
    if current.ready_state() == DocumentReadyState::Loading {
        let deferred = current.clone();
        EventListener::once(&current, "DOMContentLoaded", move |_event| {
            install_all(&deferred);
        })
        .forget();
    } else {
        install_all(&current);
    }
}

fn install_all(document: &Document) {
    textarea::install(document);
    flash::install(document, FlashTimings::default());
    tags::install(document);
    delete_guard::install(document);
    view_toggle::install(document);
}
