//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `labdot.toml` in the working directory (or the path in
//! `LABDOT_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::time::Duration;

use serde::Deserialize;

use labdot_adapter_http_reqwest::HttpProbeConfig;
use labdot_app::board::IndicatorBoard;
use labdot_domain::error::ValidationError;
use labdot_domain::id::IndicatorId;
use labdot_domain::indicator::LoadingPolicy;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Probe behaviour.
    pub probe: ProbeConfig,
    /// Periodic refresh settings.
    pub refresh: RefreshConfig,
    /// Indicators shown on the dashboard.
    pub indicators: Vec<IndicatorConfig>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Probe configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Per-request timeout in seconds. Unset means no timeout.
    pub timeout_secs: Option<u64>,
    /// Accept self-signed TLS certificates.
    pub accept_invalid_certs: bool,
    /// Whether a network failure clears the Loading marker.
    pub loading_policy: LoadingPolicy,
}

/// Periodic refresh configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Seconds between two checks of the same indicator.
    pub interval_secs: u64,
}

/// One monitored endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorConfig {
    /// Stable indicator key.
    pub id: String,
    /// URL probed with a plain GET.
    pub endpoint: String,
}

impl Config {
    /// Load configuration from `labdot.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("LABDOT_CONFIG").unwrap_or_else(|_| "labdot.toml".to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("LABDOT_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("LABDOT_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("LABDOT_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("LABDOT_REFRESH_SECS") {
            if let Ok(secs) = val.parse() {
                self.refresh.interval_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("LABDOT_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.refresh.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "refresh interval must be non-zero".to_string(),
            ));
        }
        self.build_board().map(|_| ())
    }

    /// Build the indicator board from the `[[indicators]]` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Indicator`] for a blank id or endpoint, or a
    /// duplicated id.
    pub fn build_board(&self) -> Result<IndicatorBoard, ConfigError> {
        let mut board = IndicatorBoard::new();
        for entry in &self.indicators {
            let id = IndicatorId::new(entry.id.as_str())?;
            board.register(id, entry.endpoint.as_str())?;
        }
        Ok(board)
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the delay between two checks of the same indicator.
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh.interval_secs)
    }
}

impl ProbeConfig {
    /// Settings for the reqwest probe adapter.
    #[must_use]
    pub fn http(&self) -> HttpProbeConfig {
        HttpProbeConfig {
            timeout_secs: self.timeout_secs,
            accept_invalid_certs: self.accept_invalid_certs,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "labdotd=info,labdot=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_secs: 60 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// An `[[indicators]]` entry is invalid.
    #[error("invalid indicator")]
    Indicator(#[from] ValidationError),
}
