use crate::core::{clamp_threshold, Margins, ViewportTrigger, Visibility};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type Callback = Box<dyn FnOnce()>;
type Registry = Rc<RefCell<ViewportTrigger<web::Element, Callback>>>;

/// Fires a one-shot callback the first time a watched element becomes
/// visible enough, then forgets the element.
///
/// Uses the browser's `IntersectionObserver` when present and falls back to
/// checking bounding rects on scroll/resize otherwise. Elements removed from
/// the document are forgotten as soon as the removal is observed.
pub struct Watcher {
    registry: Registry,
    observer: Option<web::IntersectionObserver>,
    threshold: f64,
}

pub fn native_observer_available(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

impl Watcher {
    pub fn new(name: &str, threshold: f64, root_margin: Margins) -> Option<Watcher> {
        let window = web::window()?;
        let document = window.document()?;
        let threshold = clamp_threshold(threshold);
        let registry: Registry = Rc::new(RefCell::new(ViewportTrigger::new()));
        let observer = if native_observer_available(&window) {
            Some(native_observer(&registry, threshold, root_margin)?)
        } else {
            log::debug!("[viewport] {name}: no IntersectionObserver, using scroll geometry");
            geometric_backend(&window, &registry, root_margin);
            None
        };
        watch_removals(&document, &registry, observer.clone());
        Some(Watcher {
            registry,
            observer,
            threshold,
        })
    }

    /// Watch `el` and run `callback` once it is visible. Elements already
    /// watched by this watcher are skipped.
    pub fn watch(&self, el: &web::Element, callback: impl FnOnce() + 'static) -> bool {
        if !self
            .registry
            .borrow_mut()
            .watch(el.clone(), self.threshold, Box::new(callback))
        {
            return false;
        }
        if let Some(observer) = &self.observer {
            observer.observe(el);
        }
        true
    }

    pub fn watched(&self) -> usize {
        self.registry.borrow().len()
    }
}

fn native_observer(
    registry: &Registry,
    threshold: f64,
    root_margin: Margins,
) -> Option<web::IntersectionObserver> {
    let registry = registry.clone();
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if !target.is_connected() {
                    registry.borrow_mut().unwatch(&target);
                    observer.unobserve(&target);
                    continue;
                }
                let vis = Visibility {
                    intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                // release the borrow before running user code
                let due = registry.borrow_mut().report(&target, vis);
                if let Some(cb) = due {
                    observer.unobserve(&target);
                    cb();
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(&root_margin.to_css());
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init);
    closure.forget();
    match observer {
        Ok(o) => Some(o),
        Err(e) => {
            log::warn!("[viewport] IntersectionObserver rejected options: {:?}", e);
            None
        }
    }
}

/// Forget watched elements as soon as they leave the document. An
/// intersection observer reports nothing for a target that was already out
/// of view when it got removed, so it cannot be relied on for this.
fn watch_removals(
    document: &web::Document,
    registry: &Registry,
    observer: Option<web::IntersectionObserver>,
) {
    let registry = registry.clone();
    let closure = Closure::wrap(Box::new(move |records: js_sys::Array| {
        // also catches nodes removed and re-inserted within the same task
        let removed: Vec<web::Node> = records
            .iter()
            .filter_map(|r| r.dyn_into::<web::MutationRecord>().ok())
            .flat_map(|r| {
                let list = r.removed_nodes();
                (0..list.length()).filter_map(move |i| list.item(i))
            })
            .collect();
        let dropped = registry.borrow_mut().retain_attached(|el| {
            let node: &web::Node = el;
            node.is_connected() && !removed.iter().any(|n| n.contains(Some(node)))
        });
        if let Some(observer) = &observer {
            for el in &dropped {
                observer.unobserve(el);
            }
        }
        if !dropped.is_empty() {
            log::debug!("[viewport] forgot {} detached element(s)", dropped.len());
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let Ok(mutations) = web::MutationObserver::new(closure.as_ref().unchecked_ref()) else {
        log::debug!("[viewport] no MutationObserver, detached elements pruned lazily");
        return;
    };
    closure.forget();
    let init = web::MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    _ = mutations.observe_with_options(document, &init);
}

fn geometric_backend(window: &web::Window, registry: &Registry, root_margin: Margins) {
    let run_pass = {
        let registry = registry.clone();
        move || {
            let Some(window) = web::window() else {
                return;
            };
            let root = dom::viewport_rect(&window).inflate(&root_margin);
            let due = registry.borrow_mut().collect(&root, |el| {
                el.is_connected().then(|| dom::client_rect(el))
            });
            for cb in due {
                cb();
            }
        }
    };
    let run_pass = Rc::new(run_pass);
    for event in ["scroll", "resize"] {
        let run = run_pass.clone();
        dom::add_listener(window, event, move |_: web::Event| (*run)());
    }
    // first pass once registration has finished
    let run = run_pass.clone();
    dom::set_timeout(window, 0, move || (*run)());
}
