// Global namespace installed on `window` for classic page scripts.

pub const NAMESPACE: &str = "BraitEnhancements";

pub const METHOD_ANIMATE: &str = "animateElement";
pub const METHOD_HOVER: &str = "addHoverEffect";
pub const METHOD_UPDATE_MOBILE: &str = "updateMobileStatus";
pub const METHOD_IS_MOBILE: &str = "isMobile";
pub const METHOD_CONFIG: &str = "getConfig";

pub const METHODS: [&str; 5] = [
    METHOD_ANIMATE,
    METHOD_HOVER,
    METHOD_UPDATE_MOBILE,
    METHOD_IS_MOBILE,
    METHOD_CONFIG,
];

/// Duration argument as passed from JS. `undefined`, `NaN`, negative and
/// infinite values fall back to the default.
pub fn duration_arg(raw: Option<f64>) -> Option<u32> {
    let ms = raw?;
    if !ms.is_finite() || ms < 0.0 {
        return None;
    }
    Some(ms.round().min(u32::MAX as f64) as u32)
}
