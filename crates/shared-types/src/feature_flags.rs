use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// with the rest of [`crate::PortalConfig`]. Every field defaults to `false`
/// so that a missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
}
