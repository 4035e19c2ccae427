//! Operational HTTP surface.
//!
//! The product's CRUD API (profiles, discovery, connection requests,
//! message history) lives in a separate service; the relay exposes
//! only operational endpoints.

pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Builds the operational HTTP router.
pub fn build_router() -> Router<AppState> {
    Router::new().merge(system::routes())
}
