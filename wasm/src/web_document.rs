use wasm_bindgen::JsCast;

use crate::rust_error;
use crate::web_error_handling::JsResult;
use crate::web_iterators::NodeListIterator;

pub struct WebDocument(web_sys::Document);

impl WebDocument {
    pub fn get_element_by_id(&self, element_id: &str) -> Option<web_sys::Element> {
        self.0.get_element_by_id(element_id)
    }
    pub fn get_existing_element_by_id(&self, element_id: &str) -> JsResult<web_sys::Element> {
        self.0
            .get_element_by_id(element_id)
            .ok_or_else(|| rust_error!("Cannot find element \"{}\"", element_id))
    }

    pub fn query_selector(&self, selectors: &str) -> JsResult<Option<web_sys::Element>> {
        self.0.query_selector(selectors)
    }

    pub fn create_element(&self, local_name: &str) -> JsResult<web_sys::Element> {
        self.0.create_element(local_name)
    }

    pub fn contains(&self, node: &web_sys::Node) -> bool {
        self.0.body().is_some_and(|body| body.contains(Some(node)))
    }
}

pub fn web_window() -> JsResult<web_sys::Window> {
    web_sys::window().ok_or_else(|| rust_error!("Cannot find window"))
}

pub fn web_document() -> JsResult<WebDocument> {
    web_window()?
        .document()
        .map(WebDocument)
        .ok_or_else(|| rust_error!("Cannot find document"))
}

/// Elements matching `selectors` under `parent`, in document order.
pub fn select_all(parent: &web_sys::Element, selectors: &str) -> JsResult<Vec<web_sys::Element>> {
    let nodes: NodeListIterator = parent.query_selector_all(selectors)?.into();
    Ok(nodes.filter_map(|node| node.dyn_into::<web_sys::Element>().ok()).collect())
}

pub fn select_html(
    parent: &web_sys::Element,
    selectors: &str,
) -> JsResult<Option<web_sys::HtmlElement>> {
    Ok(parent
        .query_selector(selectors)?
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok()))
}
