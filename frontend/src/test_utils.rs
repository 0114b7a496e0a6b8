//! Helpers for rendering components in browser tests.

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, MouseEvent, MouseEventInit};
use yew::prelude::*;
use yew::AppHandle;

fn document() -> web_sys::Document {
    crate::services::dom::document().expect("tests run with a document")
}

/// Render `C` into a fresh element appended to the body
pub fn mount<C: BaseComponent>(props: C::Properties) -> (AppHandle<C>, Element) {
    let document = document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    let handle = yew::Renderer::<C>::with_root_and_props(root.clone(), props).render();
    (handle, root)
}

/// Let pending renders and effects run. A portal needs two render passes.
pub async fn settle() {
    for _ in 0..4 {
        TimeoutFuture::new(10).await;
    }
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).unwrap()
}

pub fn count(selector: &str) -> u32 {
    document().query_selector_all(selector).unwrap().length()
}

pub fn button_with_text(text: &str) -> Option<HtmlElement> {
    let buttons = document().query_selector_all("button").unwrap();
    (0..buttons.length())
        .filter_map(|index| buttons.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .find(|button| button.text_content().is_some_and(|content| content.trim() == text))
}

/// Dispatch a bubbling mouse event of type `kind` on `target`
pub fn dispatch_mouse(target: &EventTarget, kind: &str) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// A mouse-down on `pressed` followed by a click on `released`, as a browser
/// reports a press and release on those two elements.
pub fn press_and_release(pressed: &Element, released: &Element) {
    dispatch_mouse(pressed, "mousedown");
    dispatch_mouse(released, "mouseup");
    dispatch_mouse(released, "click");
}
