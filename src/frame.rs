use crate::constants::COUNTER_SELECTOR;
use crate::core::{parse_count, CounterAnimation, Margins};
use crate::dom;
use crate::viewport::Watcher;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CounterContext {
    pub element: web::Element,
    pub animation: CounterAnimation,
    pub started: Instant,
    pub shown: Option<i64>,
}

impl CounterContext {
    pub fn new(element: web::Element, target: i64) -> Self {
        Self {
            element,
            animation: CounterAnimation::new(target),
            started: Instant::now(),
            shown: None,
        }
    }

    /// Paint one frame. Returns true once the final value is on screen.
    pub fn frame(&mut self) -> bool {
        let f = self.animation.frame_at(self.started.elapsed());
        if self.shown != Some(f.value) {
            self.element.set_text_content(Some(&f.value.to_string()));
            self.shown = Some(f.value);
        }
        f.done
    }
}

/// Drive `ctx` on animation frames until it reports done, then release the
/// frame closure.
pub fn start_loop(ctx: CounterContext) {
    let ctx = Rc::new(RefCell::new(ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if ctx.borrow_mut().frame() {
            // dropping our own closure is fine once this call returns
            tick_clone.borrow_mut().take();
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Count `[data-count]` elements up to their target once they are visible.
pub fn wire_counters(document: &web::Document) -> usize {
    let counters: Vec<(web::Element, i64)> = dom::query_all(document, COUNTER_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let target = el.get_attribute("data-count").as_deref().and_then(parse_count)?;
            Some((el, target))
        })
        .collect();
    if counters.is_empty() {
        return 0;
    }
    let Some(watcher) = Watcher::new("count", 0.0, Margins::default()) else {
        return 0;
    };
    for (el, target) in counters {
        let counter_el = el.clone();
        watcher.watch(&el, move || start_loop(CounterContext::new(counter_el, target)));
    }
    watcher.watched()
}
