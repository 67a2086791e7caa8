//! Responder service entry point

use service_relay::{api::routes::responder_router, config::ResponderSettings, init_logging};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = ResponderSettings::load()?;
    settings.validate()?;
    init_logging(&settings.logging);

    info!("Starting responder service");

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let app = responder_router();

    info!("Responder listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
