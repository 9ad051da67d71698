//! Binary entrypoint for the dashboard API.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use status_api::{AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
    )
    .init();

  let config = ServerConfig::from_env()?;
  let state = Arc::new(AppState::load(&config)?);
  info!(
    incidents = state.feed.incidents().len(),
    services = state.services.len(),
    "dashboard state loaded"
  );

  let app = status_api::router(state);

  let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
  info!("status-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
