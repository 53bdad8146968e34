//! Configuration for the gateway and its rate limiting.
//!
//! This module provides TOML-based configuration. The configuration system
//! supports:
//! - Bundled defaults (include_str! from ideaforge.toml)
//! - User overrides (~/.config/ideaforge/ideaforge.toml, then ./ideaforge.toml)
//! - Environment overrides (`IDEAFORGE__SECTION__KEY`)
//!
//! The API key itself is never part of the configuration; the config only
//! names the environment variable that holds it.

use ideaforge_error::{ConfigError, IdeaforgeResult};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../ideaforge.toml");

/// Provider connection and generation parameters.
///
/// # Example
///
/// ```toml
/// [anthropic]
/// model = "claude-3-5-sonnet-latest"
/// max_tokens = 2048
/// temperature = 0.3
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnthropicConfig {
    /// Messages endpoint URL
    pub endpoint: String,
    /// Value sent in the `anthropic-version` header
    pub api_version: String,
    /// Model identifier
    pub model: String,
    /// Maximum tokens to generate per call
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Whole-request deadline enforced by the HTTP client
    pub request_timeout_secs: u64,
    /// Connection establishment deadline
    pub connect_timeout_secs: u64,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            api_version: "2023-06-01".to_string(),
            model: "claude-3-5-haiku-latest".to_string(),
            max_tokens: 1024,
            temperature: 0.7,
            request_timeout_secs: 60,
            connect_timeout_secs: 10,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
        }
    }
}

impl AnthropicConfig {
    /// Whole-request deadline.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Connection establishment deadline.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Admission-control parameters.
///
/// ```toml
/// [rate_limit]
/// permits_per_minute = 5
/// acquire_timeout_secs = 10
/// replenish_interval_secs = 60
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RateLimitSettings {
    /// Permits restored each window (the pool capacity)
    pub permits_per_minute: u32,
    /// How long a caller waits for a permit before failing fast
    pub acquire_timeout_secs: u64,
    /// Length of the refill window
    pub replenish_interval_secs: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            permits_per_minute: 5,
            acquire_timeout_secs: 10,
            replenish_interval_secs: 60,
        }
    }
}

impl RateLimitSettings {
    /// Pool capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if `permits_per_minute` is zero.
    pub fn capacity(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.permits_per_minute)
            .ok_or_else(|| ConfigError::new("rate_limit.permits_per_minute must be positive"))
    }

    /// Permit wait before failing with a local quota error.
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Refill window.
    pub fn replenish_interval(&self) -> Duration {
        Duration::from_secs(self.replenish_interval_secs)
    }
}

/// Top-level ideaforge configuration.
///
/// Read once at startup; nothing mutates it afterwards.
///
/// # Example
///
/// ```no_run
/// use ideaforge_rate_limit::IdeaforgeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = IdeaforgeConfig::load()?;
/// println!("Permits per minute: {}", config.rate_limit.permits_per_minute);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct IdeaforgeConfig {
    /// Provider settings
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Admission-control settings
    #[serde(default)]
    pub rate_limit: RateLimitSettings,
}

impl IdeaforgeConfig {
    /// Load configuration from a specific file path.
    ///
    /// Keys missing from the file take their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> IdeaforgeResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or fails validation.
    pub fn from_toml_str(toml: &str) -> IdeaforgeResult<Self> {
        let config: Self = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: env > explicit file > current dir > home dir > bundled.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (ideaforge.toml shipped with the library)
    /// 2. User config in home directory (~/.config/ideaforge/ideaforge.toml)
    /// 3. User config in current directory (./ideaforge.toml)
    /// 4. Environment variables (`IDEAFORGE__RATE_LIMIT__PERMITS_PER_MINUTE=10`)
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if any source fails to parse or the result fails validation.
    #[instrument]
    pub fn load() -> IdeaforgeResult<Self> {
        Self::load_with_override(None)
    }

    /// Like [`load`](Self::load), with an additional required file layered
    /// above the current-directory config.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is missing, any source fails to parse, or
    /// the result fails validation.
    #[instrument]
    pub fn load_with_override(path: Option<&Path>) -> IdeaforgeResult<Self> {
        debug!("Loading configuration with precedence: env > override > current dir > home dir > bundled defaults");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/ideaforge/ideaforge.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional)
        builder = builder.add_source(File::with_name("ideaforge").required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("IDEAFORGE")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rate_limit.capacity()?;
        if self.rate_limit.replenish_interval_secs == 0 {
            return Err(ConfigError::new(
                "rate_limit.replenish_interval_secs must be positive",
            ));
        }
        if self.anthropic.max_tokens == 0 {
            return Err(ConfigError::new("anthropic.max_tokens must be positive"));
        }
        if !(0.0..=1.0).contains(&self.anthropic.temperature) {
            return Err(ConfigError::new(format!(
                "anthropic.temperature must be within 0.0..=1.0, got {}",
                self.anthropic.temperature
            )));
        }
        if self.anthropic.model.trim().is_empty() {
            return Err(ConfigError::new("anthropic.model must not be empty"));
        }
        if self.anthropic.api_key_env.trim().is_empty() {
            return Err(ConfigError::new("anthropic.api_key_env must not be empty"));
        }
        Ok(())
    }

    /// Read the API key from the environment variable named by
    /// `anthropic.api_key_env`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or empty.
    pub fn api_key(&self) -> Result<String, ConfigError> {
        let var = &self.anthropic.api_key_env;
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            Ok(_) => Err(ConfigError::new(format!("{} is set but empty", var))),
            Err(_) => Err(ConfigError::new(format!(
                "{} environment variable not set",
                var
            ))),
        }
    }
}
