//! Application settings and configuration management
//!
//! Defaults reproduce the fixed addresses of the demo deployment: the
//! responder listens on 5001 and the gateway reaches it at `http://app2:5001`.
//! With no configuration file and no environment overrides, both services
//! come up with exactly those values.

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration for the gateway service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewaySettings {
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Root configuration for the responder service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResponderSettings {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listen address configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const GATEWAY_PORT: u16 = 5000;
const RESPONDER_PORT: u16 = 5001;

/// Upstream responder address configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_data_path")]
    pub data_path: String,
    #[serde(default = "default_health_path")]
    pub health_path: String,
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://app2:5001".to_string()
}

fn default_data_path() -> String {
    "/data".to_string()
}

fn default_health_path() -> String {
    "/health".to_string()
}

fn default_timeout() -> u64 {
    5000
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl GatewaySettings {
    /// Load settings from the default configuration file and environment
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/gateway.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(GATEWAY_PORT))?
            .set_default("upstream.base_url", default_base_url())?
            .set_default("upstream.data_path", default_data_path())?
            .set_default("upstream.health_path", default_health_path())?
            .set_default("upstream.timeout_ms", default_timeout())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            .add_source(
                File::with_name(path.as_ref().to_str().unwrap_or("config/gateway"))
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("GATEWAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: GatewaySettings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }
        if self.upstream.base_url.is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "Upstream base URL cannot be empty".to_string(),
            )));
        }
        if self.upstream.timeout_ms == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Upstream timeout cannot be 0".to_string(),
            )));
        }
        Ok(())
    }
}

impl ResponderSettings {
    /// Load settings from the default configuration file and environment
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/responder.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(RESPONDER_PORT))?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            .add_source(
                File::with_name(path.as_ref().to_str().unwrap_or("config/responder"))
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("RESPONDER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: ResponderSettings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }
        Ok(())
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: GATEWAY_PORT,
            },
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ResponderSettings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: RESPONDER_PORT,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            data_path: default_data_path(),
            health_path: default_health_path(),
            timeout_ms: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
