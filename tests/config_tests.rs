// Host-side tests for the process-wide configuration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/core/config.rs");
}

use config::*;
use std::collections::HashMap;

#[test]
fn defaults_match_site_tuning() {
    let cfg = Config::default();
    assert_eq!(cfg.animation_duration_ms, 500);
    assert_eq!(cfg.hover_scale, 1.02);
    assert_eq!(cfg.mobile_hover_scale, 1.01);
    assert_eq!(cfg.stagger_delay_ms, 100);
    assert_eq!(cfg.observer_threshold, 0.1);
    assert_eq!(cfg.mobile_breakpoint_px, 768.0);
    assert!(!cfg.is_mobile);
}

#[test]
fn breakpoint_is_inclusive() {
    assert!(Config::for_width(768.0).is_mobile);
    assert!(Config::for_width(320.0).is_mobile);
    assert!(!Config::for_width(769.0).is_mobile);
    assert!(!Config::for_width(1920.0).is_mobile);
}

#[test]
fn resize_toggles_consistently_and_idempotently() {
    let mut cfg = Config::for_width(1280.0);
    assert!(!cfg.is_mobile);

    // repeated events at the same width change nothing
    for _ in 0..3 {
        assert!(!cfg.update_for_width(1280.0));
        assert!(!cfg.is_mobile);
    }

    assert!(cfg.update_for_width(600.0));
    assert!(cfg.is_mobile);
    assert!(!cfg.update_for_width(600.0));
    assert!(!cfg.update_for_width(700.0));
    assert!(cfg.is_mobile);

    assert!(cfg.update_for_width(1024.0));
    assert!(!cfg.is_mobile);
}

#[test]
fn card_hover_is_skipped_on_mobile() {
    let mut cfg = Config::for_width(1280.0);
    assert_eq!(cfg.card_hover_scale(true), Some(1.02));
    assert_eq!(cfg.card_hover_scale(false), Some(1.0));

    // a touch device may never send mouseleave, so nothing is applied at all
    cfg.update_for_width(400.0);
    assert_eq!(cfg.card_hover_scale(true), None);
    assert_eq!(cfg.card_hover_scale(false), None);
}

#[test]
fn overrides_apply_when_valid() {
    let attrs: HashMap<&str, &str> = [
        ("data-enhance-stagger", "150"),
        ("data-enhance-threshold", " 0.25 "),
        ("data-enhance-breakpoint", "1024"),
    ]
    .into_iter()
    .collect();
    let mut cfg = Config::default();
    cfg.apply_overrides(|name| attrs.get(name).map(|v| v.to_string()));
    assert_eq!(cfg.stagger_delay_ms, 150);
    assert_eq!(cfg.observer_threshold, 0.25);
    assert_eq!(cfg.mobile_breakpoint_px, 1024.0);

    // the new breakpoint takes effect on the next width check
    assert!(cfg.update_for_width(900.0));
    assert!(cfg.is_mobile);
}

#[test]
fn invalid_overrides_are_ignored() {
    let attrs: HashMap<&str, &str> = [
        ("data-enhance-stagger", "-3"),
        ("data-enhance-threshold", "1.5"),
        ("data-enhance-breakpoint", "wide"),
    ]
    .into_iter()
    .collect();
    let mut cfg = Config::default();
    cfg.apply_overrides(|name| attrs.get(name).map(|v| v.to_string()));
    assert_eq!(cfg, Config::default());
}

#[test]
fn serializes_with_camel_case_keys() {
    let cfg = Config::for_width(500.0);
    let json = serde_json::to_value(&cfg).unwrap();
    assert_eq!(json["staggerDelayMs"], 100);
    assert_eq!(json["observerThreshold"], 0.1);
    assert_eq!(json["isMobile"], true);
    assert_eq!(json["hoverScale"], 1.02);
    assert!(json.get("is_mobile").is_none());
}

#[test]
fn log_level_parsing() {
    assert_eq!(log_level_override(Some("debug")), Some(log::Level::Debug));
    assert_eq!(log_level_override(Some(" WARN ")), Some(log::Level::Warn));
    assert_eq!(log_level_override(Some("loud")), None);
    assert_eq!(log_level_override(None), None);
}
