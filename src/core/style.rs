// Inline CSS values written by the effects.

pub const EASE: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
pub const DEFAULT_ANIMATION_NAME: &str = "fadeInUp";
pub const DEFAULT_ANIMATION_MS: u32 = 700;

pub const REVEAL_ANIMATION: &str = "fadeInUp 0.7s cubic-bezier(0.4, 0, 0.2, 1) forwards";
pub const HOVER_TRANSITION: &str = "all 0.5s cubic-bezier(0.4, 0, 0.2, 1)";
pub const BUTTON_LIFT: &str = "translateY(-4px) scale(1.05)";
pub const BUTTON_REST: &str = "translateY(0) scale(1)";
pub const NOTICE_FADE_OUT: &str = "fadeOut 0.5s cubic-bezier(0.4, 0, 0.2, 1)";

pub const NOTICE_CSS: &str = "background-color: #10b981; color: white; padding: 15px 20px; \
border-radius: 8px; margin-top: 15px; animation: fadeInUp 0.5s cubic-bezier(0.4, 0, 0.2, 1);";

pub const TOOLTIP_CSS: &str = "position: absolute; background-color: #1e40af; color: white; \
padding: 8px 12px; border-radius: 6px; font-size: 12px; white-space: nowrap; z-index: 1000; \
pointer-events: none; animation: fadeInUp 0.3s cubic-bezier(0.4, 0, 0.2, 1);";

/// `animation` shorthand for a manually triggered animation.
pub fn animation_value(name: Option<&str>, duration_ms: Option<u32>) -> String {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_ANIMATION_NAME);
    let ms = duration_ms.unwrap_or(DEFAULT_ANIMATION_MS);
    format!("{name} {ms}ms {EASE}")
}

/// `animation-delay` for the `index`-th card of a grid.
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    let secs = (index as f64 * step_ms as f64) / 1000.0;
    format!("{secs}s")
}

#[inline]
pub fn scale(factor: f64) -> String {
    format!("scale({factor})")
}

#[inline]
pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

#[inline]
pub fn px(v: f64) -> String {
    format!("{v}px")
}
