//! Checker configuration.

use serde::{Deserialize, Serialize};

/// Checker configuration. Every field is optional;
/// None means "use the checker's default."
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Put every entity back into the state it was in before the check.
    /// Defaults to true.
    pub restore_state: Option<bool>,

    /// Emit one debug event per probe invocation. Defaults to false;
    /// violations are always logged.
    pub log_invocations: Option<bool>,
}

impl CheckerConfig {
    /// Parse a configuration from JSON. Unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Turn state restoration on or off.
    pub fn with_restore_state(mut self, enabled: bool) -> Self {
        self.restore_state = Some(enabled);
        self
    }

    /// Turn per-invocation logging on or off.
    pub fn with_log_invocations(mut self, enabled: bool) -> Self {
        self.log_invocations = Some(enabled);
        self
    }

    pub(crate) fn restore_state(&self) -> bool {
        self.restore_state.unwrap_or(true)
    }

    pub(crate) fn log_invocations(&self) -> bool {
        self.log_invocations.unwrap_or(false)
    }
}
