//! Configuration module - settings for the gateway and responder services

pub mod settings;

pub use settings::{
    GatewaySettings, LoggingConfig, ResponderSettings, ServerConfig, UpstreamConfig,
};
