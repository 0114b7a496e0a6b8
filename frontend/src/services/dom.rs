//! DOM plumbing shared by the dialog components.

use std::cell::Cell;

use shared::{DialogError, PortalConfig, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};
use yew::NodeRef;

use crate::services::logging::Logger;

pub(crate) fn js_error(value: JsValue) -> DialogError {
    DialogError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// A container element appended to the document body for as long as this
/// value lives. Detaching is idempotent; dropping detaches.
#[derive(Debug)]
pub struct MountNode {
    element: Element,
    attached: Cell<bool>,
}

impl MountNode {
    pub fn attach(document: &Document, config: &PortalConfig) -> Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| DialogError::Dom("document has no body".to_string()))?;
        let element = document.create_element(&config.container_tag).map_err(js_error)?;
        element
            .set_attribute(&config.marker_attribute, "")
            .map_err(js_error)?;
        body.append_child(&element).map_err(js_error)?;

        Ok(Self {
            element,
            attached: Cell::new(true),
        })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    pub fn detach(&self) {
        if self.attached.replace(false) {
            self.element.remove();
        }
    }
}

impl Drop for MountNode {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Focus the element behind `node_ref`. Returns whether anything was focused.
pub fn focus_node(node_ref: &NodeRef) -> bool {
    node_ref
        .cast::<HtmlElement>()
        .map(|element| focus_element(&element))
        .unwrap_or(false)
}

pub fn focus_element(element: &HtmlElement) -> bool {
    match element.focus() {
        Ok(()) => true,
        Err(e) => {
            Logger::warn_with_component("dom", &format!("focus failed: {}", js_error(e)));
            false
        }
    }
}

/// First descendant of `root` matching `selector`, as an `HtmlElement`
pub fn find_html_element(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}
