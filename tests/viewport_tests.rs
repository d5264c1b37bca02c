// Host-side tests for the one-shot viewport trigger.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}
mod viewport {
    include!("../src/core/viewport.rs");
}

use geometry::*;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use viewport::*;

const VIEW_H: f64 = 800.0;

fn viewport_root() -> Rect {
    Rect::new(0.0, 0.0, 1200.0, VIEW_H)
}

// A page of elements at fixed document offsets; scrolling shifts them up.
struct Page {
    tops: HashMap<u32, f64>,
    height: f64,
    scroll: f64,
    attached: HashMap<u32, bool>,
}

impl Page {
    fn new(tops: &[(u32, f64)], height: f64) -> Self {
        Self {
            tops: tops.iter().copied().collect(),
            height,
            scroll: 0.0,
            attached: tops.iter().map(|(k, _)| (*k, true)).collect(),
        }
    }

    fn rect(&self, key: &u32) -> Option<Rect> {
        if !self.attached.get(key).copied().unwrap_or(false) {
            return None;
        }
        let top = self.tops.get(key)?;
        Some(Rect::new(0.0, top - self.scroll, 300.0, self.height))
    }
}

fn counting_trigger(
    keys: &[u32],
    threshold: f64,
) -> (ViewportTrigger<u32>, Rc<RefCell<HashMap<u32, usize>>>) {
    let fired = Rc::new(RefCell::new(HashMap::new()));
    let mut trig: ViewportTrigger<u32> = ViewportTrigger::new();
    for &k in keys {
        let fired = fired.clone();
        trig.watch(
            k,
            threshold,
            Box::new(move || *fired.borrow_mut().entry(k).or_insert(0) += 1),
        );
    }
    (trig, fired)
}

#[test]
fn fires_once_when_crossing_threshold() {
    let mut page = Page::new(&[(1, 1000.0)], 100.0);
    let (mut trig, fired) = counting_trigger(&[1], 0.1);

    assert_eq!(trig.pass(&viewport_root(), |k| page.rect(k)), 0);

    // 5px of a 100px card visible: below 10%
    page.scroll = 205.0;
    assert_eq!(trig.pass(&viewport_root(), |k| page.rect(k)), 0);

    // 20px visible
    page.scroll = 220.0;
    assert_eq!(trig.pass(&viewport_root(), |k| page.rect(k)), 1);
    assert_eq!(fired.borrow()[&1], 1);
    assert!(trig.is_empty());

    // further scrolling back and forth never re-fires
    for s in [0.0, 500.0, 220.0, 900.0] {
        page.scroll = s;
        assert_eq!(trig.pass(&viewport_root(), |k| page.rect(k)), 0);
    }
    assert_eq!(fired.borrow()[&1], 1);
}

#[test]
fn already_visible_fires_on_first_pass() {
    let page = Page::new(&[(1, 10.0), (2, 300.0), (3, 5000.0)], 100.0);
    let (mut trig, fired) = counting_trigger(&[1, 2, 3], 0.1);
    assert_eq!(trig.pass(&viewport_root(), |k| page.rect(k)), 2);
    assert_eq!(fired.borrow().get(&3), None);
    assert!(trig.is_watching(&3));
}

#[test]
fn never_fires_if_never_visible() {
    let mut page = Page::new(&[(1, 10_000.0)], 100.0);
    let (mut trig, fired) = counting_trigger(&[1], 0.1);
    for s in (0..20).map(|i| i as f64 * 100.0) {
        page.scroll = s;
        trig.pass(&viewport_root(), |k| page.rect(k));
    }
    assert!(fired.borrow().is_empty());
    assert_eq!(trig.len(), 1);
}

#[test]
fn detached_element_is_dropped_without_firing() {
    let mut page = Page::new(&[(1, 2000.0)], 100.0);
    let (mut trig, fired) = counting_trigger(&[1], 0.1);
    trig.pass(&viewport_root(), |k| page.rect(k));

    page.attached.insert(1, false);
    page.scroll = 2000.0;
    assert_eq!(trig.pass(&viewport_root(), |k| page.rect(k)), 0);
    assert!(trig.is_empty());

    // even if it comes back, the watch is gone
    page.attached.insert(1, true);
    assert_eq!(trig.pass(&viewport_root(), |k| page.rect(k)), 0);
    assert!(fired.borrow().is_empty());
}

#[test]
fn duplicate_watch_is_ignored() {
    let hits = Rc::new(Cell::new(0));
    let mut trig: ViewportTrigger<u32> = ViewportTrigger::new();
    let h1 = hits.clone();
    assert!(trig.watch(7, 0.0, Box::new(move || h1.set(h1.get() + 1))));
    let h2 = hits.clone();
    assert!(!trig.watch(7, 0.0, Box::new(move || h2.set(h2.get() + 100))));
    assert_eq!(trig.len(), 1);

    let fired = trig.pass(&viewport_root(), |_| Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
    assert_eq!(fired, 1);
    assert_eq!(hits.get(), 1);
}

#[test]
fn report_hands_back_callback_once() {
    let mut trig: ViewportTrigger<u32, &'static str> = ViewportTrigger::new();
    trig.watch(1, 0.5, "reveal");

    let below = Visibility {
        intersecting: true,
        ratio: 0.4,
    };
    assert_eq!(trig.report(&1, below), None);
    assert_eq!(trig.report(&1, Visibility::HIDDEN), None);

    let enough = Visibility {
        intersecting: true,
        ratio: 0.5,
    };
    assert_eq!(trig.report(&1, enough), Some("reveal"));
    assert_eq!(trig.report(&1, enough), None);
    assert_eq!(trig.report(&42, enough), None);
}

#[test]
fn zero_threshold_needs_intersection() {
    let mut trig: ViewportTrigger<u32, ()> = ViewportTrigger::new();
    trig.watch(1, 0.0, ());
    assert_eq!(trig.report(&1, Visibility::HIDDEN), None);
    let edge = Visibility {
        intersecting: true,
        ratio: 0.0,
    };
    assert_eq!(trig.report(&1, edge), Some(()));
}

#[test]
fn thresholds_are_clamped() {
    assert_eq!(clamp_threshold(-0.5), 0.0);
    assert_eq!(clamp_threshold(1.5), 1.0);
    assert_eq!(clamp_threshold(f64::NAN), 0.0);
    assert_eq!(clamp_threshold(0.25), 0.25);

    // a threshold above 1 still fires at full visibility
    let mut trig: ViewportTrigger<u32, ()> = ViewportTrigger::new();
    trig.watch(1, 3.0, ());
    let full = Visibility {
        intersecting: true,
        ratio: 1.0,
    };
    assert_eq!(trig.report(&1, full), Some(()));
}

#[test]
fn unwatch_prevents_firing() {
    let (mut trig, fired) = counting_trigger(&[1, 2], 0.0);
    assert!(trig.unwatch(&1));
    assert!(!trig.unwatch(&1));
    let n = trig.pass(&viewport_root(), |_| Some(Rect::new(0.0, 0.0, 50.0, 50.0)));
    assert_eq!(n, 1);
    assert_eq!(fired.borrow().get(&1), None);
    assert_eq!(fired.borrow()[&2], 1);
}

#[test]
fn root_margin_delays_reveal() {
    // bottom margin of -50px: a card whose top is 30px above the fold is
    // outside the shrunk root
    let root = viewport_root().inflate(&Margins::new(0.0, 0.0, -50.0, 0.0));
    let card = Rect::new(0.0, VIEW_H - 30.0, 300.0, 100.0);
    let mut trig: ViewportTrigger<u32, ()> = ViewportTrigger::new();
    trig.watch(1, 0.1, ());
    assert!(trig.collect(&root, |_| Some(card)).is_empty());

    let card = Rect::new(0.0, VIEW_H - 70.0, 300.0, 100.0);
    assert_eq!(trig.collect(&root, |_| Some(card)).len(), 1);
}

#[test]
fn collect_preserves_registration_order() {
    let mut trig: ViewportTrigger<u32, u32> = ViewportTrigger::new();
    for k in [5, 3, 9, 1] {
        trig.watch(k, 0.0, k * 10);
    }
    let due = trig.collect(&viewport_root(), |k| {
        (*k != 9).then(|| Rect::new(0.0, 0.0, 10.0, 10.0))
    });
    assert_eq!(due, vec![50, 30, 10]);
    assert!(trig.is_empty());
}

#[test]
fn removal_while_out_of_view_blocks_later_report() {
    // removal of an off-screen element produces no visibility report, so it
    // must be pruned explicitly; re-inserting and scrolling to it is silent
    let mut trig: ViewportTrigger<&'static str, u32> = ViewportTrigger::new();
    trig.watch("gone", 0.1, 1);
    trig.watch("kept", 0.1, 2);

    let attached = |k: &&str| *k != "gone";
    assert_eq!(trig.retain_attached(attached), vec!["gone"]);
    assert!(!trig.is_watching(&"gone"));

    let visible = Visibility {
        intersecting: true,
        ratio: 1.0,
    };
    assert_eq!(trig.report(&"gone", visible), None);
    assert_eq!(trig.report(&"kept", visible), Some(2));
}

#[test]
fn retain_attached_keeps_order_and_reports_nothing_when_all_attached() {
    let mut trig: ViewportTrigger<u32, u32> = ViewportTrigger::new();
    for k in [4, 8, 15, 16] {
        trig.watch(k, 0.0, k);
    }
    assert!(trig.retain_attached(|_| true).is_empty());
    assert_eq!(trig.retain_attached(|k| k % 2 == 0), vec![15]);
    let due = trig.collect(&viewport_root(), |_| Some(Rect::new(0.0, 0.0, 1.0, 1.0)));
    assert_eq!(due, vec![4, 8, 16]);
}
