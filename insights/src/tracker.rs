//! Best-effort event dispatch to an external analytics sink.
//!
//! DESIGN
//! ======
//! `track` never fails from the caller's point of view. The outcome is
//! reported as a [`Delivery`] so callers (and tests) can see what happened:
//! disabled, sent, failed-and-logged, or deferred because the sink binding
//! has not loaded yet.
//!
//! A deferred delivery carries a [`PendingEvent`]. Its only operation,
//! [`PendingEvent::retry`], consumes it, so each `track` call gets at most one
//! second attempt. The host decides when to run it (after [`RETRY_DELAY`]).
//!
//! ERROR HANDLING
//! ==============
//! Sink failures are logged at warning level and swallowed.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use std::time::Duration;

use crate::event::{Event, Params};
use crate::policy::EnablementPolicy;

/// Delay before the single deferred dispatch attempt.
pub const RETRY_DELAY: Duration = Duration::from_millis(1500);

/// Action argument passed to the analytics function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Event,
    Set,
}

impl Command {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Set => "set",
        }
    }
}

/// Error raised by a sink when the host rejects a dispatch.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("analytics dispatch rejected: {0}")]
    Rejected(String),
    #[error("analytics params could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Host binding for the external analytics function.
pub trait AnalyticsSink {
    /// Whether the binding is loaded and callable right now.
    fn is_ready(&self) -> bool;

    /// Invoke the binding. Only called when `is_ready` returned `true`.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the host throws or the payload cannot be
    /// encoded.
    fn dispatch(&self, command: Command, name: &str, params: &Params) -> Result<(), SinkError>;
}

/// Outcome of a tracking call.
#[derive(Debug, PartialEq)]
#[must_use]
pub enum Delivery {
    /// Policy disabled tracking; nothing happened.
    Disabled,
    /// Dispatched to the sink.
    Sent,
    /// The sink raised an error; it was logged and dropped.
    Failed,
    /// The binding was absent and the call is not retried.
    Unavailable,
    /// The binding was absent; one retry may be attempted later.
    Deferred(PendingEvent),
}

/// An event waiting for its single deferred attempt.
#[derive(Debug, PartialEq)]
#[must_use]
pub struct PendingEvent {
    event: Event,
}

/// Result of the deferred attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryOutcome {
    Sent,
    Dropped,
    Failed,
}

impl PendingEvent {
    #[must_use]
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Attempt the dispatch once more. Drops the event silently when tracking
    /// is disabled or the binding is still absent.
    pub fn retry<S: AnalyticsSink>(self, tracker: &Tracker<S>) -> RetryOutcome {
        if !tracker.is_enabled() || !tracker.sink.is_ready() {
            log::debug!("analytics: dropping deferred event {}", self.event.name);
            return RetryOutcome::Dropped;
        }
        if tracker.send(Command::Event, &self.event.name, &self.event.params) {
            RetryOutcome::Sent
        } else {
            RetryOutcome::Failed
        }
    }
}

/// Event dispatcher guarded by the enablement policy.
pub struct Tracker<S> {
    policy: EnablementPolicy,
    sink: S,
}

impl<S: AnalyticsSink> Tracker<S> {
    pub fn new(policy: EnablementPolicy, sink: S) -> Self {
        Self { policy, sink }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.policy.is_enabled()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Forward an event, deferring once if the binding is not ready.
    pub fn track(&self, event: Event) -> Delivery {
        if !self.is_enabled() {
            return Delivery::Disabled;
        }
        if !self.sink.is_ready() {
            return Delivery::Deferred(PendingEvent { event });
        }
        if self.send(Command::Event, &event.name, &event.params) {
            Delivery::Sent
        } else {
            Delivery::Failed
        }
    }

    /// Publish user properties. Never deferred.
    pub fn set_user_properties(&self, params: Params) -> Delivery {
        if !self.is_enabled() {
            return Delivery::Disabled;
        }
        if !self.sink.is_ready() {
            return Delivery::Unavailable;
        }
        if self.send(Command::Set, "user_properties", &params) {
            Delivery::Sent
        } else {
            Delivery::Failed
        }
    }

    fn send(&self, command: Command, name: &str, params: &Params) -> bool {
        match self.sink.dispatch(command, name, params) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("analytics {} {name} failed: {e}", command.as_str());
                false
            }
        }
    }
}
