use super::geometry::{Rect, Visibility};

struct Watched<K, F> {
    key: K,
    threshold: f64,
    callback: F,
}

/// Registry of one-shot visibility callbacks.
///
/// Elements are identified by a caller-chosen key. Once an element's
/// visibility meets its threshold the entry is removed and its callback is
/// handed back (or run), so it can never fire a second time. Entries for
/// elements that leave the document are dropped without firing.
pub struct ViewportTrigger<K, F = Box<dyn FnOnce()>> {
    watched: Vec<Watched<K, F>>,
}

impl<K: PartialEq, F> Default for ViewportTrigger<K, F> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
pub fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

impl<K: PartialEq, F> ViewportTrigger<K, F> {
    pub fn new() -> Self {
        Self {
            watched: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    pub fn is_watching(&self, key: &K) -> bool {
        self.watched.iter().any(|w| &w.key == key)
    }

    /// Start watching `key`. Returns false (and drops `callback`) when the
    /// key is already watched.
    pub fn watch(&mut self, key: K, threshold: f64, callback: F) -> bool {
        if self.is_watching(&key) {
            return false;
        }
        self.watched.push(Watched {
            key,
            threshold: clamp_threshold(threshold),
            callback,
        });
        true
    }

    /// Forget `key` without firing. Used when the element left the document.
    pub fn unwatch(&mut self, key: &K) -> bool {
        let before = self.watched.len();
        self.watched.retain(|w| &w.key != key);
        before != self.watched.len()
    }

    /// Drop every entry whose element is no longer attached, without firing.
    /// Returns the keys that were dropped.
    pub fn retain_attached<A>(&mut self, mut attached: A) -> Vec<K>
    where
        A: FnMut(&K) -> bool,
    {
        let mut dropped = Vec::new();
        let mut i = 0;
        while i < self.watched.len() {
            if attached(&self.watched[i].key) {
                i += 1;
            } else {
                dropped.push(self.watched.remove(i).key);
            }
        }
        dropped
    }

    /// Feed one observation for `key`. When it meets the threshold the entry
    /// is removed and its callback returned for the caller to run.
    pub fn report(&mut self, key: &K, vis: Visibility) -> Option<F> {
        let idx = self.watched.iter().position(|w| &w.key == key)?;
        if !vis.meets(self.watched[idx].threshold) {
            return None;
        }
        Some(self.watched.swap_remove(idx).callback)
    }

    /// Evaluate every watched element against `root`. `geometry` returns the
    /// element's rect, or `None` when the element is no longer attached.
    /// Returns the callbacks that became due, in registration order.
    pub fn collect<G>(&mut self, root: &Rect, mut geometry: G) -> Vec<F>
    where
        G: FnMut(&K) -> Option<Rect>,
    {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.watched.len() {
            match geometry(&self.watched[i].key) {
                None => {
                    self.watched.remove(i);
                }
                Some(rect) if Visibility::of(&rect, root).meets(self.watched[i].threshold) => {
                    due.push(self.watched.remove(i).callback);
                }
                Some(_) => i += 1,
            }
        }
        due
    }
}

impl<K: PartialEq, F: FnOnce()> ViewportTrigger<K, F> {
    /// One observation pass: run every callback whose element is now visible
    /// enough. Returns how many fired.
    pub fn pass<G>(&mut self, root: &Rect, geometry: G) -> usize
    where
        G: FnMut(&K) -> Option<Rect>,
    {
        let due = self.collect(root, geometry);
        let fired = due.len();
        for cb in due {
            cb();
        }
        fired
    }
}
