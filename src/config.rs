//! Configuration Module
//!
//! Handles loading and validating service configuration from environment
//! variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::scouter::Region;

// == Config Error ==
/// Problems found while loading configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    NotPositive { name: &'static str },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },

    #[error("unsupported region '{0}' (expected tms, kms or msea)")]
    InvalidRegion(String),
}

// == Cache Config ==
/// Settings for the profile cache and its background tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// When false every lookup goes straight to the upstream API
    pub enabled: bool,
    /// Default entry lifetime in milliseconds
    pub ttl_ms: u64,
    /// Maximum number of cached entries
    pub max_size: usize,
    /// Expired-entry sweep interval in seconds
    pub sweep_interval: u64,
    /// Full cache flush interval in seconds
    pub flush_interval: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_ms: 300_000,
            max_size: 512,
            sweep_interval: 60,
            flush_interval: 86_400,
        }
    }
}

// == Scouter Config ==
/// Connection settings for the MapleScouter API.
#[derive(Debug, Clone, PartialEq)]
pub struct ScouterConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    pub api_key: String,
    /// Equipment preset requested from the API
    pub preset: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl ScouterConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ScouterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.maplescouter.com/api".to_string(),
            api_key: String::new(),
            preset: "00000".to_string(),
            timeout_ms: 8_000,
        }
    }
}

// == Nexon Config ==
/// Connection settings for the Nexon Open API.
#[derive(Debug, Clone, PartialEq)]
pub struct NexonConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Sent as `x-nxopen-api-key`
    pub api_key: String,
    pub timeout_ms: u64,
}

impl NexonConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for NexonConfig {
    fn default() -> Self {
        Self {
            base_url: "https://open.api.nexon.com".to_string(),
            api_key: String::new(),
            timeout_ms: 8_000,
        }
    }
}

// == Config ==
/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub cache: CacheConfig,
    pub scouter: ScouterConfig,
    pub nexon: NexonConfig,
    /// Game region every lookup targets
    pub region: Region,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Loads configuration from environment variables and validates it.
    ///
    /// # Environment Variables
    /// - `CACHE_ENABLED` - Enable the profile cache (default: true)
    /// - `CACHE_TTL_MS` - Entry lifetime in milliseconds (default: 300000)
    /// - `CACHE_MAX_SIZE` - Maximum cached entries (default: 512)
    /// - `CACHE_SWEEP_INTERVAL` - Expired-entry sweep in seconds (default: 60)
    /// - `CACHE_FLUSH_INTERVAL` - Full flush in seconds (default: 86400)
    /// - `MAPLE_REGION` - `tms`, `kms` or `msea` (default: tms)
    /// - `SCOUTER_BASE_URL` - MapleScouter API base URL
    /// - `SCOUTER_API_KEY` - MapleScouter API key (default: empty)
    /// - `SCOUTER_PRESET` - Equipment preset (default: 00000)
    /// - `SCOUTER_TIMEOUT_MS` - Upstream timeout in milliseconds (default: 8000)
    /// - `NEXON_BASE_URL` - Nexon Open API base URL
    /// - `NEXON_API_KEY` - Nexon Open API key (default: empty)
    /// - `NEXON_TIMEOUT_MS` - Nexon request timeout in milliseconds (default: 8000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let region = match env::var("MAPLE_REGION") {
            Ok(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => defaults.region,
        };

        let config = Self {
            cache: CacheConfig {
                enabled: env_or("CACHE_ENABLED", defaults.cache.enabled),
                ttl_ms: env_or("CACHE_TTL_MS", defaults.cache.ttl_ms),
                max_size: env_or("CACHE_MAX_SIZE", defaults.cache.max_size),
                sweep_interval: env_or("CACHE_SWEEP_INTERVAL", defaults.cache.sweep_interval),
                flush_interval: env_or("CACHE_FLUSH_INTERVAL", defaults.cache.flush_interval),
            },
            scouter: ScouterConfig {
                base_url: env_or("SCOUTER_BASE_URL", defaults.scouter.base_url)
                    .trim()
                    .trim_end_matches('/')
                    .to_string(),
                api_key: env_or("SCOUTER_API_KEY", defaults.scouter.api_key),
                preset: env_or("SCOUTER_PRESET", defaults.scouter.preset),
                timeout_ms: env_or("SCOUTER_TIMEOUT_MS", defaults.scouter.timeout_ms),
            },
            nexon: NexonConfig {
                base_url: env_or("NEXON_BASE_URL", defaults.nexon.base_url)
                    .trim()
                    .trim_end_matches('/')
                    .to_string(),
                api_key: env_or("NEXON_API_KEY", defaults.nexon.api_key),
                timeout_ms: env_or("NEXON_TIMEOUT_MS", defaults.nexon.timeout_ms),
            },
            region,
            server_port: env_or("SERVER_PORT", defaults.server_port),
        };

        config.validate()?;
        Ok(config)
    }

    // == Validate ==
    /// Rejects settings the cache and client cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("CACHE_TTL_MS", self.cache.ttl_ms),
            ("CACHE_MAX_SIZE", self.cache.max_size as u64),
            ("CACHE_SWEEP_INTERVAL", self.cache.sweep_interval),
            ("CACHE_FLUSH_INTERVAL", self.cache.flush_interval),
            ("SCOUTER_TIMEOUT_MS", self.scouter.timeout_ms),
            ("NEXON_TIMEOUT_MS", self.nexon.timeout_ms),
        ];
        if let Some((name, _)) = positive.into_iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::NotPositive { name });
        }

        if self.scouter.base_url.is_empty() {
            return Err(ConfigError::Empty {
                name: "SCOUTER_BASE_URL",
            });
        }
        if self.nexon.base_url.is_empty() {
            return Err(ConfigError::Empty {
                name: "NEXON_BASE_URL",
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            scouter: ScouterConfig::default(),
            nexon: NexonConfig::default(),
            region: Region::Tms,
            server_port: 3000,
        }
    }
}

/// Reads and parses an environment variable, falling back to `default`.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
