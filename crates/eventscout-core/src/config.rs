//! Layered configuration for eventscout
//!
//! Values resolve with the precedence CLI > environment > file > defaults,
//! and each one remembers where it came from so the CLI can report it.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{EventscoutError, Result};

/// Default base URL for the suggestion and event-search services
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the eventscout client
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Base URL serving both `/suggest` and `/events`
    pub service_url: ConfigValue<String>,

    /// Ambient geolocation endpoint. `None` means the host exposes no
    /// geolocation capability.
    pub locator_url: ConfigValue<Option<String>>,

    /// Per-request timeout in seconds
    pub timeout_secs: ConfigValue<u64>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            service_url: ConfigValue::new(DEFAULT_SERVICE_URL.to_string(), ConfigSource::Default),
            locator_url: ConfigValue::new(None, ConfigSource::Default),
            timeout_secs: ConfigValue::new(DEFAULT_TIMEOUT_SECS, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| EventscoutError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| EventscoutError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(service_url) = file_config.service_url {
            self.service_url.update(service_url, ConfigSource::File);
        }

        if let Some(locator_url) = file_config.locator_url {
            self.locator_url.update(Some(locator_url), ConfigSource::File);
        }

        if let Some(timeout_secs) = file_config.timeout_secs {
            self.timeout_secs.update(timeout_secs, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // EVENTSCOUT_SERVICE_URL
        if let Ok(service_url) = env::var("EVENTSCOUT_SERVICE_URL") {
            self.service_url.update(service_url, ConfigSource::Environment);
        }

        // EVENTSCOUT_LOCATOR_URL
        if let Ok(locator_url) = env::var("EVENTSCOUT_LOCATOR_URL") {
            self.locator_url.update(Some(locator_url), ConfigSource::Environment);
        }

        // EVENTSCOUT_TIMEOUT_SECS
        if let Ok(timeout_str) = env::var("EVENTSCOUT_TIMEOUT_SECS") {
            match timeout_str.parse::<u64>() {
                Ok(timeout_secs) => {
                    self.timeout_secs.update(timeout_secs, ConfigSource::Environment);
                }
                Err(_) => tracing::warn!(
                    "Invalid EVENTSCOUT_TIMEOUT_SECS value '{}': expected whole seconds",
                    timeout_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(service_url) = overrides.service_url {
            self.service_url.update(service_url, ConfigSource::Cli);
        }

        if let Some(locator_url) = overrides.locator_url {
            self.locator_url.update(Some(locator_url), ConfigSource::Cli);
        }

        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs.update(timeout_secs, ConfigSource::Cli);
        }
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    service_url: Option<String>,
    locator_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub service_url: Option<String>,
    pub locator_url: Option<String>,
    pub timeout_secs: Option<u64>,
}
