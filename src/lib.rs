//! # lfg-relay
//!
//! Real-time presence and WebRTC signaling relay for the LFG
//! gamer-matchmaking app.
//!
//! The relay terminates one WebSocket per signed-in client, tracks
//! which connection currently represents each user, and routes chat,
//! typing, and call-signaling events between live peers. It owns no
//! business state: auth, profile storage, message persistence, and the
//! UI are external collaborators, and media flows directly between
//! peers once signaling completes.
//!
//! ## Architecture
//!
//! ```text
//! Clients (WebSocket)
//!     │
//!     ├── WS Handler (ws/handler)
//!     ├── Connection task per client (ws/connection)
//!     │       │
//!     │       ├── PresenceRegistry (domain/)   UserId ↔ ConnId
//!     │       └── Switchboard (ws/switchboard) ConnId → outbound queue
//!     │
//!     └── Health endpoint (api/)
//! ```
//!
//! Delivery is best-effort: presence is purely in-memory, offline
//! targets are silent drops, and nothing survives a restart.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod ws;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Assembles the complete relay router: WebSocket endpoint plus the
/// operational HTTP surface. Used by `main` and by the integration
/// tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws::handler::ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
