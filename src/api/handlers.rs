//! Request handlers for the gateway and responder services

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::Result;
use crate::GatewayState;

/// Static payload returned by the responder's data route
pub const RESPONDER_PAYLOAD: &str = "Hello from App 2!";

/// Prefix the gateway wraps around the responder's body
pub const RELAY_PREFIX: &str = "Response from App 2: ";

/// Health report returned by both services
#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_reachable: Option<bool>,
}

/// Gateway `GET /` - relay a call to the responder and republish its body
pub async fn relay(State(state): State<Arc<GatewayState>>) -> Result<String> {
    let body = state.upstream.fetch_data().await?;
    debug!(bytes = body.len(), "Relaying upstream response");
    Ok(format!("{}{}", RELAY_PREFIX, body))
}

/// Responder `GET /data` - static text payload
pub async fn data() -> &'static str {
    RESPONDER_PAYLOAD
}

/// Gateway `GET /health` - own liveness plus upstream reachability
///
/// The gateway is alive regardless of the responder, so this always
/// returns 200; upstream reachability is advisory.
pub async fn gateway_health(State(state): State<Arc<GatewayState>>) -> Json<HealthReport> {
    let reachable = state.upstream.health_check().await;
    Json(HealthReport {
        status: "ok",
        service: "gateway",
        upstream_reachable: Some(reachable),
    })
}

/// Responder `GET /health`
pub async fn responder_health() -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        service: "responder",
        upstream_reachable: None,
    })
}
