//! lfg-relay server entry point.
//!
//! Starts the Axum server with the WebSocket relay endpoint and the
//! operational HTTP surface.

use tracing_subscriber::EnvFilter;

use lfg_relay::app_state::AppState;
use lfg_relay::config::RelayConfig;
use lfg_relay::error::RelayError;
use lfg_relay::router;

#[tokio::main]
async fn main() -> Result<(), RelayError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = RelayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting lfg-relay");

    // Presence registry and switchboard are rebuilt from scratch every
    // start; there is no presence persistence.
    let app_state = AppState::new(config.outbound_queue_capacity);

    let app = router(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
