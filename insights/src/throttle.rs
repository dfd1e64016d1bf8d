//! Once-per-frame coalescing guard for scroll and resize handlers.
//!
//! The host asks [`FrameGate::try_schedule`] on every raw event. Only the
//! first call after a completed frame returns `true`; the caller then
//! requests an animation frame and calls [`FrameGate::complete`] from inside
//! it. Events that arrive while a frame is pending are folded into it.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
    coalesced: Cell<u32>,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the caller should schedule a frame now.
    pub fn try_schedule(&self) -> bool {
        if self.pending.get() {
            self.coalesced.set(self.coalesced.get().saturating_add(1));
            return false;
        }
        self.pending.set(true);
        true
    }

    /// Mark the pending frame as run. Returns how many events it absorbed
    /// beyond the one that scheduled it.
    pub fn complete(&self) -> u32 {
        self.pending.set(false);
        self.coalesced.replace(0)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
