// Selectors and timing constants for the page effects

use crate::core::Margins;

pub const CARD_SELECTORS: [&str; 9] = [
    ".service-card",
    ".pricing-card",
    ".case-card",
    ".portfolio-card",
    ".testimonial-card",
    ".content-card",
    ".feature-card",
    ".blog-card",
    ".card",
];

pub const GRID_SELECTORS: [&str; 8] = [
    ".service-grid",
    ".pricing-grid",
    ".case-grid",
    ".portfolio-grid",
    ".testimonial-grid",
    ".content-grid",
    ".feature-grid",
    ".blog-grid",
];

pub const GRID_CARD_SELECTOR: &str = "[class*=\"card\"]";
pub const BUTTON_SELECTOR: &str = ".btn-primary, .btn-secondary";
pub const CONTACT_FORM_SELECTOR: &str = "form[name=\"contact\"], form[id*=\"contact\"]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const MENU_TOGGLE_SELECTOR: &str = "[class*=\"menu-toggle\"], [id*=\"menu-toggle\"]";
pub const MOBILE_MENU_SELECTOR: &str = "[class*=\"mobile-menu\"], [id*=\"mobile-menu\"]";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const COUNTER_SELECTOR: &str = "[data-count]";
pub const TOOLTIP_SELECTOR: &str = "[data-tooltip]";

pub const HOVER_CLASS: &str = "card";
pub const ACTIVE_CLASS: &str = "active";
pub const LOADED_CLASS: &str = "loaded";
pub const RIPPLE_CLASS: &str = "ripple";
pub const NOTICE_CLASS: &str = "success-message";
pub const TOOLTIP_CLASS: &str = "tooltip";

pub const NOTICE_TEXT: &str = "\u{2713} Thank you! We'll contact you soon.";

// Reveal observer shrinks the viewport bottom so cards start a little late
pub const REVEAL_ROOT_MARGIN: Margins = Margins::new(0.0, 0.0, -50.0, 0.0);

pub const RIPPLE_LIFETIME_MS: i32 = 600;
pub const TOOLTIP_GAP_PX: f64 = 10.0;
pub const PARALLAX_FACTOR: f64 = 0.5;
