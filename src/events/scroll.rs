use crate::constants::*;
use crate::core::{self, style, AnchorAction, Margins};
use crate::dom;
use crate::settings;
use crate::viewport::Watcher;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fade cards in the first time they scroll into view.
pub fn wire_reveal(document: &web::Document, threshold: f64) -> usize {
    let cards = dom::query_all_unique(document, &CARD_SELECTORS);
    if cards.is_empty() {
        return 0;
    }
    let Some(watcher) = Watcher::new("reveal", threshold, REVEAL_ROOT_MARGIN) else {
        return 0;
    };
    for card in cards {
        let el = card.clone();
        watcher.watch(&card, move || {
            dom::set_style(&el, "opacity", "1");
            dom::set_style(&el, "animation", style::REVEAL_ANIMATION);
        });
    }
    watcher.watched()
}

pub fn apply_stagger(document: &web::Document, step_ms: u32) -> usize {
    let mut tagged = 0;
    for sel in GRID_SELECTORS {
        let Some(grid) = dom::query_first(document, sel) else {
            continue;
        };
        for (i, card) in dom::query_all_in(&grid, GRID_CARD_SELECTOR).iter().enumerate() {
            dom::set_style(card, "animation-delay", &style::stagger_delay(i, step_ms));
            tagged += 1;
        }
    }
    tagged
}

pub fn wire_lazy_images(document: &web::Document) -> usize {
    let images = dom::query_all(document, LAZY_IMAGE_SELECTOR);
    if images.is_empty() {
        return 0;
    }
    let Some(watcher) = Watcher::new("lazy", 0.0, Margins::default()) else {
        return 0;
    };
    for img in images {
        let el = img.clone();
        watcher.watch(&img, move || load_image(&el));
    }
    watcher.watched()
}

fn load_image(img: &web::Element) {
    let deferred = img.get_attribute("data-src").filter(|s| !s.is_empty());
    if let Some(src) = deferred {
        match img.dyn_ref::<web::HtmlImageElement>() {
            Some(image) => image.set_src(&src),
            None => {
                _ = img.set_attribute("src", &src);
            }
        }
    }
    _ = img.class_list().add_1(LOADED_CLASS);
}

/// Scroll-linked offset for `[data-parallax]`. Installed on desktop only.
pub fn wire_parallax(document: &web::Document, window: &web::Window) -> usize {
    let elements: Vec<web::HtmlElement> = dom::query_all(document, PARALLAX_SELECTOR)
        .into_iter()
        .filter_map(|e| e.dyn_into::<web::HtmlElement>().ok())
        .collect();
    if elements.is_empty() || settings::is_mobile() {
        return 0;
    }
    let count = elements.len();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        if settings::is_mobile() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        let scroll_y = w.scroll_y().unwrap_or(0.0);
        for el in &elements {
            let dy = core::parallax_offset(scroll_y, el.offset_top() as f64, PARALLAX_FACTOR);
            _ = el.style().set_property("transform", &style::translate_y(dy));
        }
    });
    count
}

pub fn wire_smooth_scroll(document: &web::Document) -> usize {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR);
    for anchor in &anchors {
        let link = anchor.clone();
        dom::add_listener(anchor, "click", move |ev: web::MouseEvent| {
            let href = link.get_attribute("href").unwrap_or_default();
            match core::anchor_action(&href) {
                AnchorAction::Ignore => {}
                AnchorAction::Swallow => ev.prevent_default(),
                AnchorAction::ScrollTo(id) => {
                    ev.prevent_default();
                    scroll_to_id(id);
                }
            }
        });
    }
    anchors.len()
}

fn scroll_to_id(id: &str) {
    let Some(target) = dom::window_document().and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("[scroll] no element with id {:?}", id);
        return;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}
