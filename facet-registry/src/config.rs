//! Registry configuration.

use serde::{Deserialize, Serialize};

/// Registry configuration. Every field is optional;
/// None means "use the registry's default."
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Name attached to every log event from this registry.
    /// Defaults to `"default"`.
    pub name: Option<String>,

    /// Emit one debug event per successful delivery during fan-out.
    /// Defaults to false; failures are always logged.
    pub log_deliveries: Option<bool>,
}

impl RegistryConfig {
    /// Parse a configuration from JSON. Unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the registry name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Turn per-delivery logging on or off.
    pub fn with_log_deliveries(mut self, enabled: bool) -> Self {
        self.log_deliveries = Some(enabled);
        self
    }

    pub(crate) fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("default")
    }

    pub(crate) fn log_deliveries(&self) -> bool {
        self.log_deliveries.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let config = RegistryConfig::from_json("{}").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.name(), "default");
        assert!(!config.log_deliveries());
    }

    #[test]
    fn json_fields_override_defaults() {
        let config =
            RegistryConfig::from_json(r#"{"name": "doors", "log_deliveries": true}"#).unwrap();
        assert_eq!(config.name(), "doors");
        assert!(config.log_deliveries());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(RegistryConfig::from_json(r#"{"log_deliveries": "yes"}"#).is_err());
    }

    #[test]
    fn builders_set_fields() {
        let config = RegistryConfig::default()
            .with_name("ducks")
            .with_log_deliveries(true);
        assert_eq!(config.name.as_deref(), Some("ducks"));
        assert_eq!(config.log_deliveries, Some(true));
    }
}
