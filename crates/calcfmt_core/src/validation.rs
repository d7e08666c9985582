//! Field-level validation issues, grouped by input field.

use std::collections::BTreeMap;

use serde::Serialize;

/// Validation failure messages keyed by the offending field.
///
/// Serializes as `{"field": ["message", ...]}`, which is exactly the
/// `issues` object of a 400 response. `BTreeMap` keeps field order stable
/// across runs.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Issues(BTreeMap<String, Vec<String>>);

impl Issues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field constructor for the common one-problem case.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut issues = Self::new();
        issues.push(field, message);
        issues
    }

    /// Records one failure message against `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
