//! Gateway service entry point

use service_relay::{
    api::routes::gateway_router, config::GatewaySettings, init_logging,
    upstream::UpstreamClient, GatewayState,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = GatewaySettings::load()?;
    settings.validate()?;
    init_logging(&settings.logging);

    info!("Starting gateway service");
    info!(
        upstream = %settings.upstream.base_url,
        path = %settings.upstream.data_path,
        timeout_ms = settings.upstream.timeout_ms,
        "Relaying to upstream responder"
    );

    let upstream = UpstreamClient::new(&settings.upstream)?;
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = Arc::new(GatewayState { settings, upstream });

    let app = gateway_router(state);

    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
