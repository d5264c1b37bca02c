use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::Rect;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`. Invalid selectors match nothing.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    node_list_elements(root.query_selector_all(selector).ok())
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    node_list_elements(root.query_selector_all(selector).ok())
}

/// Elements matching any of `selectors`, each listed once, in discovery order.
pub fn query_all_unique(document: &web::Document, selectors: &[&str]) -> Vec<web::Element> {
    let mut out: Vec<web::Element> = Vec::new();
    for sel in selectors {
        for el in query_all(document, sel) {
            if !out.contains(&el) {
                out.push(el);
            }
        }
    }
    out
}

fn node_list_elements(list: Option<web::NodeList>) -> Vec<web::Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_first(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Current viewport in client coordinates.
pub fn viewport_rect(window: &web::Window) -> Rect {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Rect::new(0.0, 0.0, w, h)
}

#[inline]
pub fn inner_width(window: &web::Window) -> f64 {
    window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Listener that the browser removes after its first invocation.
pub fn add_listener_once(target: &web::EventTarget, event: &str, handler: impl FnOnce() + 'static) {
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    let cb = Closure::once_into_js(handler);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.unchecked_ref(),
        &opts,
    );
}

pub fn set_timeout(window: &web::Window, millis: i32, handler: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(handler);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), millis);
}
