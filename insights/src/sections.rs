//! Section first-view and dwell-time tracking.
//!
//! The host reports visibility transitions at the 50% threshold. Each section
//! id has an independent dwell timer; the first-view set is separate from
//! the timers and only ever grows.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use std::collections::{HashMap, HashSet};

use crate::catalog;
use crate::event::{Event, elapsed_seconds};

/// Visible fraction at which a section counts as viewed.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Dwells shorter than this are not reported.
pub const MIN_DWELL_SECS: f64 = 2.0;

#[derive(Clone, Debug, Default)]
pub struct SectionDwellTracker {
    seen: HashSet<String>,
    entered_at_ms: HashMap<String, f64>,
}

impl SectionDwellTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_seen(&self, section_id: &str) -> bool {
        self.seen.contains(section_id)
    }

    #[must_use]
    pub fn is_dwelling(&self, section_id: &str) -> bool {
        self.entered_at_ms.contains_key(section_id)
    }

    /// Record a visibility transition for `section_id` at `now_ms`.
    pub fn observe(&mut self, section_id: &str, visible: bool, now_ms: f64) -> Vec<Event> {
        if visible {
            self.enter(section_id, now_ms)
        } else {
            self.leave(section_id, now_ms)
        }
    }

    fn enter(&mut self, section_id: &str, now_ms: f64) -> Vec<Event> {
        let mut events = Vec::new();
        if self.seen.insert(section_id.to_owned()) {
            events.push(catalog::section_view(section_id));
        }
        self.entered_at_ms.entry(section_id.to_owned()).or_insert(now_ms);
        events
    }

    fn leave(&mut self, section_id: &str, now_ms: f64) -> Vec<Event> {
        let Some(entered_at) = self.entered_at_ms.remove(section_id) else {
            return Vec::new();
        };
        let raw_secs = (now_ms - entered_at) / 1000.0;
        if raw_secs < MIN_DWELL_SECS {
            return Vec::new();
        }
        vec![catalog::section_dwell(section_id, elapsed_seconds(entered_at, now_ms))]
    }
}
