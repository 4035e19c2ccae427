//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::PresenceRegistry;
use crate::ws::Switchboard;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// The registry and switchboard are the only shared mutable state in
/// the relay; both are owned here and injected into each connection
/// task, never reached through globals.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Live user ↔ connection presence map.
    pub registry: Arc<PresenceRegistry>,
    /// Outbound routing table from connections to their write queues.
    pub switchboard: Arc<Switchboard>,
}

impl AppState {
    /// Creates fresh state with empty presence and routing tables.
    #[must_use]
    pub fn new(outbound_queue_capacity: usize) -> Self {
        Self {
            registry: Arc::new(PresenceRegistry::new()),
            switchboard: Arc::new(Switchboard::new(outbound_queue_capacity)),
        }
    }
}
