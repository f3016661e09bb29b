//! Browser checks for textarea auto-sizing.

use super::*;
use crate::core::logic::px;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, Event, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

// Zero padding and border so scroll_height reads back exactly the content
// height the wiring measured; UA default padding would skew the comparison.
const PLAIN_AREA: &str = r#"<textarea style="padding:0;border:0"></textarea>"#;

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

fn textarea_in(wrapper: &Element) -> HtmlTextAreaElement {
    wrapper
        .query_selector("textarea")
        .expect("query")
        .expect("textarea present")
        .dyn_into::<HtmlTextAreaElement>()
        .expect("textarea element")
}

fn inline_height(area: &HtmlTextAreaElement) -> String {
    area.style().get_property_value("height").expect("height")
}

fn fire_input(area: &HtmlTextAreaElement) {
    let event = Event::new("input").expect("input event");
    area.dispatch_event(&event).expect("dispatch input");
}

#[wasm_bindgen_test]
fn prefilled_textarea_is_sized_on_install() {
    let wrapper = mount(
        "<textarea style=\"padding:0;border:0\">line one\nline two\nline three</textarea>",
    );
    textarea::install(&document());

    let area = textarea_in(&wrapper);
    assert_eq!(inline_height(&area), px(area.scroll_height()));

    wrapper.remove();
}

#[wasm_bindgen_test]
fn empty_textarea_keeps_its_stylesheet_height() {
    let wrapper = mount("<textarea></textarea>");
    textarea::install(&document());

    let area = textarea_in(&wrapper);
    assert_eq!(inline_height(&area), "");

    wrapper.remove();
}

#[wasm_bindgen_test]
fn input_events_resize_to_the_scroll_height() {
    let wrapper = mount(PLAIN_AREA);
    textarea::install(&document());

    let area = textarea_in(&wrapper);
    area.set_value("one\ntwo\nthree\nfour");
    fire_input(&area);

    assert_eq!(inline_height(&area), px(area.scroll_height()));

    wrapper.remove();
}

#[wasm_bindgen_test]
fn repeated_identical_input_keeps_the_same_height() {
    let wrapper = mount(PLAIN_AREA);
    textarea::install(&document());

    let area = textarea_in(&wrapper);
    area.set_value("one\ntwo\nthree\nfour");
    fire_input(&area);
    let first = inline_height(&area);

    fire_input(&area);
    let second = inline_height(&area);

    assert_eq!(first, second);
    assert_eq!(second, px(area.scroll_height()));

    wrapper.remove();
}
