//! Scroll depth milestones and return-to-top detection.
//!
//! DESIGN
//! ======
//! [`ScrollDepthTracker`] is a one-way state machine: each milestone moves
//! from "not reached" to "reached" exactly once per page session, and the
//! return-to-top transition can only happen after the 100% milestone. The
//! tracker is safe to call at any frequency; repeated samples at the same
//! depth emit nothing.
//!
//! ROUNDING
//! ========
//! Depth is `floor(scroll_top / scrollable * 100)`, so a milestone is only
//! reported once the position has genuinely crossed it. Because browsers
//! report fractional scroll offsets that may never equal the integer
//! scrollable height, a scrollable page whose remaining distance to the
//! bottom is within [`BOTTOM_TOLERANCE_PX`] counts as 100%.
//!
//! On pages whose scrollable height is at most twice [`NEAR_TOP_PX`], the
//! near-top threshold shrinks to half the scrollable height.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::collections::BTreeSet;

use crate::catalog;
use crate::event::{Event, elapsed_seconds};

/// Depth percentages that each fire one `scroll_depth` event.
pub const MILESTONES: [u8; 4] = [25, 50, 75, 100];

/// Scroll offset below which the viewport counts as "back at the top".
pub const NEAR_TOP_PX: f64 = 150.0;

/// Remaining distance to the bottom that still counts as the bottom.
pub const BOTTOM_TOLERANCE_PX: f64 = 1.0;

/// One reading of the page scroll geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollSample {
    #[must_use]
    pub fn new(scroll_top: f64, viewport_height: f64, document_height: f64) -> Self {
        Self { scroll_top, viewport_height, document_height }
    }

    /// Maximum scroll offset, never below one pixel.
    #[must_use]
    pub fn scrollable_height(&self) -> f64 {
        (self.document_height - self.viewport_height).max(1.0)
    }

    /// Whether the document is taller than the viewport at all.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.document_height - self.viewport_height >= 1.0
    }

    /// Offset below which the viewport counts as back at the top. Capped at
    /// half the scrollable height so a short page's bottom is never also its
    /// top.
    #[must_use]
    pub fn near_top_px(&self) -> f64 {
        NEAR_TOP_PX.min(self.scrollable_height() / 2.0)
    }

    /// Scroll depth as a whole percentage in `0..=100`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn depth_percent(&self) -> u8 {
        let top = if self.scroll_top.is_finite() { self.scroll_top.max(0.0) } else { 0.0 };
        if !self.is_scrollable() {
            return 0;
        }
        let scrollable = self.scrollable_height();
        if scrollable - top <= BOTTOM_TOLERANCE_PX {
            return 100;
        }
        (top / scrollable * 100.0).floor().clamp(0.0, 100.0) as u8
    }
}

/// Milestone and return-to-top state for one page session.
#[derive(Clone, Debug, Default)]
pub struct ScrollDepthTracker {
    reached: BTreeSet<u8>,
    bottom_at_ms: Option<f64>,
    returned_to_top: bool,
}

impl ScrollDepthTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_reached(&self, milestone: u8) -> bool {
        self.reached.contains(&milestone)
    }

    #[must_use]
    pub fn reached_bottom(&self) -> bool {
        self.bottom_at_ms.is_some()
    }

    #[must_use]
    pub fn returned_to_top(&self) -> bool {
        self.returned_to_top
    }

    /// Feed one sample taken at `now_ms` and return the events it produced.
    ///
    /// The return-to-top check runs against the state left by earlier
    /// samples, so the sample that first reaches the bottom cannot also count
    /// as the return.
    pub fn observe(&mut self, sample: ScrollSample, now_ms: f64) -> Vec<Event> {
        let mut events = Vec::new();

        if let Some(bottom_at) = self.bottom_at_ms
            && !self.returned_to_top
            && sample.scroll_top < sample.near_top_px()
        {
            self.returned_to_top = true;
            events.push(catalog::return_to_top_after_bottom(elapsed_seconds(bottom_at, now_ms)));
        }

        let percent = sample.depth_percent();
        for mark in MILESTONES {
            if percent < mark || !self.reached.insert(mark) {
                continue;
            }
            events.push(catalog::scroll_depth(mark));
            if mark == 100 && self.bottom_at_ms.is_none() {
                self.bottom_at_ms = Some(now_ms);
            }
        }

        events
    }
}
