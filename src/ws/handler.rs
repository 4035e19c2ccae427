//! Axum WebSocket upgrade handler.

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use super::connection::run_connection;
use crate::app_state::AppState;
use crate::domain::UserId;

/// Handshake parameters for `/ws`.
///
/// `user_id` is placed in the URL by the client from the auth
/// collaborator's session; the relay trusts it as given and performs
/// no verification of its own.
#[derive(Debug, Deserialize)]
pub struct AttachParams {
    /// Authenticated logical user id, opaque to the relay.
    pub user_id: Option<String>,
}

/// `GET /ws` — Upgrade HTTP connection to WebSocket.
///
/// A missing or empty `user_id` is a malformed handshake: the socket
/// is still upgraded, but the connection stays unattached (never
/// registered, never routable) rather than being forcibly closed.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<AttachParams>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let user = params
        .user_id
        .map(UserId::from)
        .filter(|user| !user.is_empty());
    if user.is_none() {
        tracing::warn!("ws handshake missing user_id; connection will stay unattached");
    }

    ws.on_upgrade(move |socket| run_connection(socket, state, user))
}
