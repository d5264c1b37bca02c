use serde::Serialize;

pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Process-wide tuning values plus the current viewport mode.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub animation_duration_ms: u32,
    pub hover_scale: f64,
    pub mobile_hover_scale: f64,
    pub stagger_delay_ms: u32,
    pub observer_threshold: f64,
    pub mobile_breakpoint_px: f64,
    pub is_mobile: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation_duration_ms: 500,
            hover_scale: 1.02,
            mobile_hover_scale: 1.01,
            stagger_delay_ms: 100,
            observer_threshold: 0.1,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            is_mobile: false,
        }
    }
}

impl Config {
    pub fn for_width(inner_width: f64) -> Self {
        let mut cfg = Self::default();
        cfg.update_for_width(inner_width);
        cfg
    }

    #[inline]
    pub fn is_mobile_width(&self, inner_width: f64) -> bool {
        inner_width <= self.mobile_breakpoint_px
    }

    /// Recompute the mobile flag. Returns true only when the flag changed.
    pub fn update_for_width(&mut self, inner_width: f64) -> bool {
        let mobile = self.is_mobile_width(inner_width);
        let changed = mobile != self.is_mobile;
        self.is_mobile = mobile;
        changed
    }

    /// Scale a card should take on hover enter/leave, or `None` in mobile
    /// mode where hover styling is skipped.
    pub fn card_hover_scale(&self, entering: bool) -> Option<f64> {
        if self.is_mobile {
            return None;
        }
        Some(if entering { self.hover_scale } else { 1.0 })
    }

    /// Apply `data-enhance-*` overrides. `lookup` receives the attribute
    /// name; values that do not parse or are out of range are ignored.
    pub fn apply_overrides<L>(&mut self, lookup: L)
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("data-enhance-stagger").and_then(|s| s.trim().parse::<u32>().ok()) {
            self.stagger_delay_ms = v;
        }
        if let Some(v) = lookup("data-enhance-threshold")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| (0.0..=1.0).contains(v))
        {
            self.observer_threshold = v;
        }
        if let Some(v) = lookup("data-enhance-breakpoint")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
        {
            self.mobile_breakpoint_px = v;
        }
    }
}

/// Console log level requested by the page, if any.
pub fn log_level_override(value: Option<&str>) -> Option<log::Level> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "error" => Some(log::Level::Error),
        "warn" => Some(log::Level::Warn),
        "info" => Some(log::Level::Info),
        "debug" => Some(log::Level::Debug),
        "trace" => Some(log::Level::Trace),
        _ => None,
    }
}
