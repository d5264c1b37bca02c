#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod namespace;
mod settings;
mod viewport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = dom::window_document()
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute("data-enhance-log"));
    let level = core::log_level_override(level.as_deref()).unwrap_or(log::Level::Info);
    console_log::init_with_level(level).ok();
    log::info!("site-enhance starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if document.ready_state() == "loading" {
        dom::add_listener_once(&document, "DOMContentLoaded", move || {
            if let Some(window) = web::window() {
                if let Some(document) = window.document() {
                    init_all(&window, &document);
                }
            }
        });
    } else {
        init_all(&window, &document);
    }
    Ok(())
}

fn init_all(window: &web::Window, document: &web::Document) {
    let cfg = settings::load(document, window);
    log::debug!("[init] config {:?}", cfg);
    settings::replace(cfg.clone());

    let revealed = events::wire_reveal(document, cfg.observer_threshold);
    let hovered = events::wire_card_hover(document);
    let buttons = events::wire_buttons(document);
    let staggered = events::apply_stagger(document, cfg.stagger_delay_ms);
    settings::wire_resize(window);
    let form = events::wire_contact_form(document);
    let anchors = events::wire_smooth_scroll(document);
    let menu = events::wire_mobile_menu(document);
    let images = events::wire_lazy_images(document);
    let parallax = events::wire_parallax(document, window);
    let counters = frame::wire_counters(document);
    let tooltips = events::wire_tooltips(document);
    if !namespace::install(window) {
        log::warn!("[init] could not install window.{}", core::api::NAMESPACE);
    }

    log::debug!(
        "[init] reveal={} hover={} buttons={} stagger={} form={} anchors={} menu={} images={} parallax={} counters={} tooltips={}",
        revealed, hovered, buttons, staggered, form, anchors, menu, images, parallax, counters, tooltips
    );
    log::info!("site-enhance ready (mobile={})", cfg.is_mobile);
}

// ---------------- Page-facing utilities ----------------

/// Play a CSS animation on `element`. Defaults to `fadeInUp` over 700ms.
#[wasm_bindgen(js_name = animateElement)]
pub fn animate_element(
    element: &web::HtmlElement,
    animation_name: Option<String>,
    duration_ms: Option<u32>,
) {
    let value = core::style::animation_value(animation_name.as_deref(), duration_ms);
    _ = element.style().set_property("animation", &value);
}

/// Give every element matching `selector` the card hover styling.
#[wasm_bindgen(js_name = addHoverEffect)]
pub fn add_hover_effect(selector: &str) -> usize {
    let Some(document) = dom::window_document() else {
        return 0;
    };
    let matches = dom::query_all(&document, selector);
    for el in &matches {
        _ = el.class_list().add_1(constants::HOVER_CLASS);
    }
    matches.len()
}

#[wasm_bindgen(js_name = updateMobileStatus)]
pub fn update_mobile_status() -> bool {
    settings::refresh_mobile()
}

#[wasm_bindgen(js_name = isMobile)]
pub fn is_mobile() -> bool {
    settings::is_mobile()
}

#[wasm_bindgen(js_name = getConfig)]
pub fn get_config() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&settings::get()).map_err(|e| JsValue::from_str(&e.to_string()))
}

