//! Service relay demo
//!
//! Two HTTP services in one crate: a responder that returns a fixed text
//! payload, and a gateway that calls the responder over the network and
//! embeds its reply in the gateway's own response.

pub mod api;
pub mod config;
pub mod error;
pub mod upstream;

pub use error::{AppError, Result};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{GatewaySettings, LoggingConfig};
use crate::upstream::UpstreamClient;

/// State shared across gateway handlers
pub struct GatewayState {
    pub settings: GatewaySettings,
    pub upstream: UpstreamClient,
}

/// Initialize the tracing subscriber from logging configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
