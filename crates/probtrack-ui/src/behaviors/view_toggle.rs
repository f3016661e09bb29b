//! Block/table toggle for the problems listing, persisted per browser.

use crate::behaviors::storage::LocalPrefs;
use crate::core::markers::{
    ACTIVE_CLASS, BLOCK_VIEW_BUTTON_ID, BLOCK_VIEW_CONTAINER_ID, TABLE_VIEW_BUTTON_ID,
    TABLE_VIEW_CONTAINER_ID,
};
use crate::core::view::{ViewMode, ViewPresentation, ViewToggle};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

#[derive(Clone)]
struct ToggleElements {
    block_control: Element,
    table_control: Element,
    block_container: HtmlElement,
    table_container: HtmlElement,
}

impl ToggleElements {
    /// All four marker elements, or `None` when the page lacks any of them.
    fn resolve(document: &Document) -> Option<Self> {
        Some(Self {
            block_control: document.get_element_by_id(BLOCK_VIEW_BUTTON_ID)?,
            table_control: document.get_element_by_id(TABLE_VIEW_BUTTON_ID)?,
            block_container: document
                .get_element_by_id(BLOCK_VIEW_CONTAINER_ID)?
                .dyn_into()
                .ok()?,
            table_container: document
                .get_element_by_id(TABLE_VIEW_CONTAINER_ID)?
                .dyn_into()
                .ok()?,
        })
    }

    fn apply(&self, shown: ViewPresentation) {
        let _ = self
            .block_control
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, shown.block_control_active);
        let _ = self
            .table_control
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, shown.table_control_active);
        let _ = self
            .block_container
            .style()
            .set_property("display", shown.block_container_display);
        let _ = self
            .table_container
            .style()
            .set_property("display", shown.table_container_display);
    }
}

/// Restore the persisted mode, then let the two controls switch it.
pub(crate) fn install(document: &Document) {
    let Some(elements) = ToggleElements::resolve(document) else {
        return;
    };

    let toggle = Rc::new(RefCell::new(ViewToggle::restore(LocalPrefs)));
    let restored = toggle.borrow().current();
    elements.apply(toggle.borrow_mut().select(restored));

    for (control, mode) in [
        (elements.block_control.clone(), ViewMode::Block),
        (elements.table_control.clone(), ViewMode::Table),
    ] {
        let toggle = Rc::clone(&toggle);
        let elements = elements.clone();
        EventListener::new(&control, "click", move |_event| {
            let shown = toggle.borrow_mut().select(mode);
            elements.apply(shown);
        })
        .forget();
    }
}
