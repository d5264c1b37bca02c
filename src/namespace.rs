use crate::core::api;
use js_sys::{Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn set_method(obj: &Object, name: &str, f: JsValue) {
    _ = Reflect::set(obj, &JsValue::from_str(name), &f);
}

/// Expose the page utilities as `window.BraitEnhancements` so inline
/// `<script>` blocks can reach them without importing the module.
pub fn install(window: &web::Window) -> bool {
    let obj = Object::new();

    let animate = Closure::wrap(Box::new(|el: JsValue, name: JsValue, duration: JsValue| {
        let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
            log::debug!("[namespace] {} needs an element", api::METHOD_ANIMATE);
            return;
        };
        crate::animate_element(&el, name.as_string(), api::duration_arg(duration.as_f64()));
    }) as Box<dyn FnMut(JsValue, JsValue, JsValue)>);
    set_method(&obj, api::METHOD_ANIMATE, animate.into_js_value());

    let hover = Closure::wrap(Box::new(|selector: JsValue| -> u32 {
        selector
            .as_string()
            .map(|s| crate::add_hover_effect(&s) as u32)
            .unwrap_or(0)
    }) as Box<dyn FnMut(JsValue) -> u32>);
    set_method(&obj, api::METHOD_HOVER, hover.into_js_value());

    let update = Closure::wrap(Box::new(crate::update_mobile_status) as Box<dyn FnMut() -> bool>);
    set_method(&obj, api::METHOD_UPDATE_MOBILE, update.into_js_value());

    let mobile = Closure::wrap(Box::new(crate::is_mobile) as Box<dyn FnMut() -> bool>);
    set_method(&obj, api::METHOD_IS_MOBILE, mobile.into_js_value());

    let config = Closure::wrap(Box::new(|| crate::get_config().unwrap_or(JsValue::NULL))
        as Box<dyn FnMut() -> JsValue>);
    set_method(&obj, api::METHOD_CONFIG, config.into_js_value());

    Reflect::set(window, &JsValue::from_str(api::NAMESPACE), &obj).unwrap_or(false)
}
