use crate::constants::*;
use crate::core::{self, style};
use crate::dom;
use crate::settings;
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Smooth transition plus a slight scale on card hover. Desktop only: touch
/// devices emit `mouseenter` without a matching `mouseleave`.
pub fn wire_card_hover(document: &web::Document) -> usize {
    let cards = dom::query_all_unique(document, &CARD_SELECTORS);
    for card in &cards {
        for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let el = card.clone();
            dom::add_listener(card, event, move |_: web::MouseEvent| {
                let Some(factor) = settings::get().card_hover_scale(entering) else {
                    return;
                };
                dom::set_style(&el, "transition", style::HOVER_TRANSITION);
                dom::set_style(&el, "transform", &style::scale(factor));
            });
        }
    }
    cards.len()
}

pub fn wire_buttons(document: &web::Document) -> usize {
    let buttons = dom::query_all(document, BUTTON_SELECTOR);
    for button in &buttons {
        let enter_el = button.clone();
        dom::add_listener(button, "mouseenter", move |_: web::MouseEvent| {
            if !settings::is_mobile() {
                dom::set_style(&enter_el, "transform", style::BUTTON_LIFT);
            }
        });
        let leave_el = button.clone();
        dom::add_listener(button, "mouseleave", move |_: web::MouseEvent| {
            if !settings::is_mobile() {
                dom::set_style(&leave_el, "transform", style::BUTTON_REST);
            }
        });
        let click_el = button.clone();
        dom::add_listener(button, "click", move |ev: web::MouseEvent| {
            spawn_ripple(&click_el, &ev);
        });
    }
    buttons.len()
}

fn spawn_ripple(button: &web::Element, ev: &web::MouseEvent) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    let r = core::ripple_for_click(
        &dom::client_rect(button),
        ev.client_x() as f64,
        ev.client_y() as f64,
    );
    let size = style::px(r.size);
    dom::set_style(&ripple, "width", &size);
    dom::set_style(&ripple, "height", &size);
    dom::set_style(&ripple, "left", &style::px(r.left));
    dom::set_style(&ripple, "top", &style::px(r.top));
    _ = ripple.class_list().add_1(RIPPLE_CLASS);
    if button.append_child(&ripple).is_err() {
        return;
    }
    dom::set_timeout(&window, RIPPLE_LIFETIME_MS, move || ripple.remove());
}

pub fn wire_tooltips(document: &web::Document) -> usize {
    let anchors = dom::query_all(document, TOOLTIP_SELECTOR);
    for el in &anchors {
        let target = el.clone();
        dom::add_listener(el, "mouseenter", move |_: web::MouseEvent| {
            show_tooltip(&target);
        });
    }
    anchors.len()
}

fn show_tooltip(anchor: &web::Element) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(tip) = document.create_element("div") else {
        return;
    };
    tip.set_class_name(TOOLTIP_CLASS);
    tip.set_text_content(anchor.get_attribute("data-tooltip").as_deref());
    _ = tip.set_attribute("style", style::TOOLTIP_CSS);
    if body.append_child(&tip).is_err() {
        return;
    }
    if let Some(html) = tip.dyn_ref::<web::HtmlElement>() {
        let size = DVec2::new(html.offset_width() as f64, html.offset_height() as f64);
        let pos = core::tooltip_position(&dom::client_rect(anchor), size, TOOLTIP_GAP_PX);
        dom::set_style(&tip, "left", &style::px(pos.x));
        dom::set_style(&tip, "top", &style::px(pos.y));
    }
    dom::add_listener_once(anchor, "mouseleave", move || tip.remove());
}
