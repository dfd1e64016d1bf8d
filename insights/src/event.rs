//! Event payload model.
//!
//! An event is a name plus a flat map of scalar parameters. Parameters are
//! kept in a `BTreeMap` so serialized payloads are stable, which keeps test
//! assertions and host-side debugging predictable.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use std::collections::BTreeMap;

use serde::Serialize;

/// A single scalar parameter value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Number(f64),
    Bool(bool),
}

impl ParamValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u8> for ParamValue {
    fn from(value: u8) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Flat parameter map attached to an event.
pub type Params = BTreeMap<String, ParamValue>;

/// A named analytics event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Event {
    pub name: String,
    pub params: Params,
}

impl Event {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self { name: name.to_owned(), params: Params::new() }
    }

    /// Builder-style parameter insert. Later inserts overwrite earlier ones.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.to_owned(), value.into());
        self
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }
}

/// Serialize a parameter map as the flat JSON object sinks hand to the host.
///
/// # Errors
///
/// Propagates `serde_json` serialization failures.
pub fn params_json(params: &Params) -> Result<String, serde_json::Error> {
    serde_json::to_string(params)
}

/// Round to two decimal places, matching the precision hosts display for
/// durations.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Milliseconds to seconds, floored at zero and rounded to two decimals.
#[must_use]
pub fn elapsed_seconds(from_ms: f64, to_ms: f64) -> f64 {
    round2(((to_ms - from_ms) / 1000.0).max(0.0))
}
