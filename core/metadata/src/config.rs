//! Configuration for the MyAnimeList provider

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{DEFAULT_ORDER, PROVIDER_NAME, URL_TEMPLATE};

/// Provider settings, loadable from TOML. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Key under which the external id is stored on library items
    pub provider_name: String,

    /// Delay applied before each query to the metadata source
    pub throttle_interval_ms: u64,

    /// External id link template, `{id}` is replaced with the id
    pub url_template: String,

    /// Position among the host's metadata providers (lower runs first)
    pub order: i32,

    /// Display order assigned to resolved series
    pub series_display_order: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_name: PROVIDER_NAME.to_string(),
            throttle_interval_ms: 1000,
            url_template: URL_TEMPLATE.to_string(),
            order: DEFAULT_ORDER,
            series_display_order: "absolute".to_string(),
        }
    }
}

impl ProviderConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from file, or fall back to defaults if it doesn't exist.
    pub async fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match tokio::fs::read_to_string(path.as_ref()).await {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    "No provider config at {}, using defaults",
                    path.as_ref().display()
                );
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.throttle_interval_ms)
    }

    /// Set the throttle interval
    pub fn with_throttle_interval(mut self, interval: Duration) -> Self {
        self.throttle_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Set the provider name
    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = name.into();
        self
    }

    /// Link to the source page of an external id
    pub fn external_url(&self, external_id: &str) -> String {
        self.url_template.replace("{id}", external_id)
    }
}
