//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Run the Savage (minimax regret) rule in the default evaluation
    #[serde(default)]
    pub include_savage: bool,
}
