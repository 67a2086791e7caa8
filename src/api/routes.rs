//! Router construction for both services

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::GatewayState;

/// Build the gateway router
pub fn gateway_router(state: Arc<GatewayState>) -> Router {
    Router::new()
        .route("/", get(handlers::relay))
        .route("/health", get(handlers::gateway_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the responder router
pub fn responder_router() -> Router {
    Router::new()
        .route("/data", get(handlers::data))
        .route("/health", get(handlers::responder_health))
        .layer(TraceLayer::new_for_http())
}
