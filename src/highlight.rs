//! Timed highlights for components and wires.
//!
//! Highlights are driven by an automation layer ("look at this part"). Each
//! one may carry a one-shot timer. Timers are plain deadlines: nothing runs in
//! the background, the host pumps the scheduler with [`HighlightScheduler::fire_due`]
//! (or fires a single [`TimerHandle`]) and every lookup also hides entries
//! whose deadline has passed, so a late pump never shows a stale highlight.
//!
//! ## Lifecycle
//!
//! ```text
//! highlight(k)            -> entry(k) with new timer, previous timer of k cancelled
//! clear(Some(k))          -> entry(k) removed, its timer cancelled
//! clear(None)             -> all entries of that kind removed
//! fire(handle)            -> entry removed only if it still owns `handle`
//! ```

use crate::settings::HighlightDefaults;
use crate::types::ConnectionKey;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Caller-supplied highlight options. Unset fields take the configured
/// defaults for the kind of target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    pub color: Option<String>,
    /// Lifetime in milliseconds; `Some(0)` keeps the highlight until cleared
    pub duration_ms: Option<u64>,
    pub pulse: Option<bool>,
}

impl HighlightOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn pulse(mut self, pulse: bool) -> Self {
        self.pulse = Some(pulse);
        self
    }

    /// Keep the highlight until it is cleared explicitly.
    pub fn sticky(self) -> Self {
        self.duration_ms(0)
    }
}

/// One-shot expiry timer of a highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    id: u64,
    deadline: Instant,
}

impl TimerHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// An active highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub color: String,
    pub pulse: bool,
    timer: Option<TimerHandle>,
}

impl Highlight {
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    #[inline]
    fn is_expired(&self, now: Instant) -> bool {
        self.timer.is_some_and(|t| now >= t.deadline)
    }
}

#[derive(Debug)]
struct HighlightMap<K> {
    entries: HashMap<K, Highlight>,
}

impl<K> Default for HighlightMap<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> HighlightMap<K> {
    fn insert(&mut self, key: K, highlight: Highlight) {
        // Replacing the entry drops the previous timer with it
        self.entries.insert(key, highlight);
    }

    fn get(&self, key: &K, now: Instant) -> Option<&Highlight> {
        self.entries.get(key).filter(|h| !h.is_expired(now))
    }

    fn clear(&mut self, key: Option<&K>) -> usize {
        match key {
            Some(key) => usize::from(self.entries.remove(key).is_some()),
            None => {
                let count = self.entries.len();
                self.entries.clear();
                count
            }
        }
    }

    fn fire(&mut self, handle: TimerHandle) -> bool {
        let owner = self
            .entries
            .iter()
            .find(|(_, h)| h.timer.is_some_and(|t| t.id == handle.id))
            .map(|(k, _)| k.clone());
        match owner {
            Some(key) => self.entries.remove(&key).is_some(),
            None => false,
        }
    }

    fn fire_due(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, h| !h.is_expired(now));
        before - self.entries.len()
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.entries
            .values()
            .filter_map(|h| h.timer.map(|t| t.deadline))
            .min()
    }

    fn iter_active(&self, now: Instant) -> impl Iterator<Item = (&K, &Highlight)> {
        self.entries.iter().filter(move |(_, h)| !h.is_expired(now))
    }

    fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.entries.retain(|k, _| keep(k));
    }
}

/// Highlight state for components (by id) and wires (by [`ConnectionKey`]).
#[derive(Debug, Default)]
pub struct HighlightScheduler {
    defaults: HighlightDefaults,
    components: HighlightMap<String>,
    wires: HighlightMap<ConnectionKey>,
    next_timer_id: u64,
}

impl HighlightScheduler {
    pub fn new(defaults: HighlightDefaults) -> Self {
        Self {
            defaults,
            ..Default::default()
        }
    }

    pub fn defaults(&self) -> &HighlightDefaults {
        &self.defaults
    }

    /// Defaults for subsequent highlights; active ones keep their look.
    pub fn set_defaults(&mut self, defaults: HighlightDefaults) {
        self.defaults = defaults;
    }

    fn build(&mut self, options: &HighlightOptions, default_color: String, now: Instant) -> Highlight {
        let duration_ms = options.duration_ms.unwrap_or(self.defaults.duration_ms);
        let timer = (duration_ms > 0).then(|| {
            self.next_timer_id += 1;
            TimerHandle {
                id: self.next_timer_id,
                deadline: now + Duration::from_millis(duration_ms),
            }
        });
        Highlight {
            color: options.color.clone().unwrap_or(default_color),
            pulse: options.pulse.unwrap_or(self.defaults.pulse),
            timer,
        }
    }

    /// Highlight a component. A previous highlight of the same component is
    /// replaced and its timer can no longer fire.
    pub fn highlight_component(
        &mut self,
        component_id: &str,
        options: &HighlightOptions,
        now: Instant,
    ) -> Option<TimerHandle> {
        let color = self.defaults.component_color.clone();
        let highlight = self.build(options, color, now);
        let timer = highlight.timer;
        self.components.insert(component_id.to_string(), highlight);
        tracing::debug!("Highlighted component {}", component_id);
        timer
    }

    /// Highlight a wire. Same replacement rules as components.
    pub fn highlight_wire(
        &mut self,
        key: ConnectionKey,
        options: &HighlightOptions,
        now: Instant,
    ) -> Option<TimerHandle> {
        let color = self.defaults.wire_color.clone();
        let highlight = self.build(options, color, now);
        let timer = highlight.timer;
        tracing::debug!("Highlighted wire {}", key);
        self.wires.insert(key, highlight);
        timer
    }

    /// Remove one component highlight, or all of them with `None`.
    pub fn clear_component(&mut self, component_id: Option<&str>) -> usize {
        match component_id {
            Some(id) => self.components.clear(Some(&id.to_string())),
            None => self.components.clear(None),
        }
    }

    /// Remove one wire highlight, or all of them with `None`.
    pub fn clear_wire(&mut self, key: Option<&ConnectionKey>) -> usize {
        self.wires.clear(key)
    }

    pub fn component(&self, component_id: &str, now: Instant) -> Option<&Highlight> {
        self.components.get(&component_id.to_string(), now)
    }

    pub fn wire(&self, key: &ConnectionKey, now: Instant) -> Option<&Highlight> {
        self.wires.get(key, now)
    }

    pub fn active_components(&self, now: Instant) -> impl Iterator<Item = (&String, &Highlight)> {
        self.components.iter_active(now)
    }

    pub fn active_wires(&self, now: Instant) -> impl Iterator<Item = (&ConnectionKey, &Highlight)> {
        self.wires.iter_active(now)
    }

    /// Expire the highlight owning `handle`. Returns false for a handle that
    /// was cancelled or replaced.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        self.components.fire(handle) || self.wires.fire(handle)
    }

    /// Expire every highlight whose deadline is at or before `now`.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        let expired = self.components.fire_due(now) + self.wires.fire_due(now);
        if expired > 0 {
            tracing::debug!("Expired {} highlight(s)", expired);
        }
        expired
    }

    /// Earliest pending deadline across both kinds.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.components.next_deadline(), self.wires.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Drop highlights of components and wires that no longer exist.
    pub fn retain(
        &mut self,
        mut keep_component: impl FnMut(&str) -> bool,
        keep_wire: impl FnMut(&ConnectionKey) -> bool,
    ) {
        self.components.retain(|id| keep_component(id));
        self.wires.retain(keep_wire);
    }

    pub fn is_empty(&self) -> bool {
        self.components.entries.is_empty() && self.wires.entries.is_empty()
    }
}
