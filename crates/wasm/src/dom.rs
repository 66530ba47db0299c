//! Thin helpers over `web_sys` for the lookups every feature needs.
//!
//! Lookups return `Option`: a missing element means the feature is absent
//! from this page, never an error.

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn query(root: &Document, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_html(root: &Document, selector: &str) -> Option<HtmlElement> {
    query(root, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all<T: JsCast>(root: &Document, selector: &str) -> Vec<T> {
    collect(root.query_selector_all(selector))
}

pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    collect(root.query_selector_all(selector))
}

fn collect<T: JsCast>(list: Result<NodeList, JsValue>) -> Vec<T> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Register `handler` for `event` on `target` for the rest of the page's life.
pub fn listen<E: FromWasmAbi + 'static>(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn log(message: &str) {
    web_sys::console::log_1(&format!("vitrine: {message}").into());
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&format!("vitrine: {message}").into());
}

pub fn error(message: &str) {
    web_sys::console::error_1(&format!("vitrine: {message}").into());
}
