//! Analytics instrumentation core for the portfolio site.
//!
//! This crate is browser agnostic: every observation source is a small owned
//! state machine that turns host observations (scroll samples, visibility
//! transitions, link activations) into [`Event`] values, and the [`Tracker`]
//! forwards those events to whatever [`AnalyticsSink`] the host provides.
//! The `portfolio` crate wires these pieces to real DOM callbacks.

pub mod catalog;
pub mod event;
pub mod links;
pub mod policy;
pub mod scroll;
pub mod sections;
pub mod throttle;
pub mod tracker;

pub use event::{Event, ParamValue, Params, params_json};
pub use links::{LinkClass, LinkTarget, Network, ResolvedUrl, classify};
pub use policy::EnablementPolicy;
pub use scroll::{ScrollDepthTracker, ScrollSample};
pub use sections::SectionDwellTracker;
pub use throttle::FrameGate;
pub use tracker::{AnalyticsSink, Command, Delivery, PendingEvent, RetryOutcome, SinkError, Tracker};
