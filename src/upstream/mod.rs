//! Upstream module - HTTP client for the responder service

pub mod client;

pub use client::UpstreamClient;
