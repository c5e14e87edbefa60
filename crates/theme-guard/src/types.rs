use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a selectable preference option (a theme).
///
/// Equality is by name. Hosts that cannot report a current value hand out
/// `None` instead of a sentinel name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceValue(String);

impl PreferenceValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PreferenceValue {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PreferenceValue {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
}

/// A user-facing message. Pure output; sinks decide how to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

/// Result of the entitlement check for a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Deny,
}

/// What a single change notification ended up doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// Unknown current value, or the value already tracked as approved.
    Ignored,
    Approved {
        value: PreferenceValue,
    },
    Reverted {
        denied: PreferenceValue,
        restored: PreferenceValue,
    },
    /// Denied while no approved value had ever been established.
    UnknownBaseline {
        denied: PreferenceValue,
    },
    /// Denied, but the last approved value is gone or could not be applied.
    MissingFallback {
        denied: PreferenceValue,
        fallback: PreferenceValue,
    },
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored)
    }
}
