use crate::core::Config;
use crate::dom;
use std::cell::RefCell;
use web_sys as web;

thread_local! {
    static CONFIG: RefCell<Config> = RefCell::new(Config::default());
}

pub fn get() -> Config {
    CONFIG.with(|c| c.borrow().clone())
}

pub fn replace(cfg: Config) {
    CONFIG.with(|c| *c.borrow_mut() = cfg);
}

#[inline]
pub fn is_mobile() -> bool {
    CONFIG.with(|c| c.borrow().is_mobile)
}

/// Re-read the window width. Returns the (possibly unchanged) mobile flag.
pub fn refresh_mobile() -> bool {
    let Some(window) = web::window() else {
        return is_mobile();
    };
    let width = dom::inner_width(&window);
    CONFIG.with(|c| {
        let mut cfg = c.borrow_mut();
        if cfg.update_for_width(width) {
            log::debug!("[settings] viewport {}px, mobile={}", width, cfg.is_mobile);
        }
        cfg.is_mobile
    })
}

/// Build the startup configuration from defaults, `<html data-enhance-*>`
/// overrides and the current window width.
pub fn load(document: &web::Document, window: &web::Window) -> Config {
    let mut cfg = Config::default();
    if let Some(root) = document.document_element() {
        cfg.apply_overrides(|name| root.get_attribute(name));
    }
    cfg.update_for_width(dom::inner_width(window));
    cfg
}

pub fn wire_resize(window: &web::Window) {
    dom::add_listener(window, "resize", |_: web::Event| {
        refresh_mobile();
    });
    refresh_mobile();
}
