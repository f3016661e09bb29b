//! Browser checks for the tag input Enter guard.

use super::*;
use crate::core::markers::NEW_TAGS_INPUT_ID;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> Element {
    let wrapper = document().create_element("div").expect("create wrapper");
    wrapper.set_inner_html(html);
    document()
        .body()
        .expect("document body")
        .append_child(&wrapper)
        .expect("mount wrapper");
    wrapper
}

fn keydown(key: &str) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_cancelable(true);
    init.set_bubbles(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keydown event")
}

#[wasm_bindgen_test]
fn enter_on_the_tag_input_is_suppressed() {
    let wrapper = mount(r#"<form><input id="new_tags" type="text"></form>"#);
    tags::install(&document());

    let input = document()
        .get_element_by_id(NEW_TAGS_INPUT_ID)
        .expect("input present");
    let event = keydown("Enter");
    input.dispatch_event(&event).expect("dispatch");
    assert!(event.default_prevented());

    wrapper.remove();
}

#[wasm_bindgen_test]
fn other_keys_pass_through() {
    let wrapper = mount(r#"<form><input id="new_tags" type="text"></form>"#);
    tags::install(&document());

    let input = document()
        .get_element_by_id(NEW_TAGS_INPUT_ID)
        .expect("input present");
    let event = keydown("a");
    input.dispatch_event(&event).expect("dispatch");
    assert!(!event.default_prevented());

    wrapper.remove();
}

#[wasm_bindgen_test]
fn pages_without_the_tag_input_install_cleanly() {
    let wrapper = mount(r#"<form><input type="text"></form>"#);
    tags::install(&document());
    wrapper.remove();
}
