//! Connection-keyed outbound routing table.
//!
//! [`Switchboard`] maps each live [`ConnId`] to the bounded queue
//! feeding that connection's write half. Delivery is fire-and-forget:
//! a missing route, a closed queue, or a full queue (slow peer) all
//! drop the event silently, so forwarding never stalls the sender's
//! task.

use std::collections::HashMap;

use tokio::sync::{RwLock, mpsc};

use super::messages::ServerEvent;
use crate::domain::ConnId;

/// Routing table from live connections to their outbound queues.
#[derive(Debug)]
pub struct Switchboard {
    routes: RwLock<HashMap<ConnId, mpsc::Sender<ServerEvent>>>,
    queue_capacity: usize,
}

impl Switchboard {
    /// Creates an empty switchboard whose outbound queues hold up to
    /// `queue_capacity` pending events each.
    #[must_use]
    pub fn new(queue_capacity: usize) -> Self {
        Self {
            routes: RwLock::new(HashMap::new()),
            queue_capacity,
        }
    }

    /// Opens a route for `conn` and returns the receiving end of its
    /// outbound queue. The connection task drains the receiver into
    /// the socket's write half.
    pub async fn open(&self, conn: ConnId) -> mpsc::Receiver<ServerEvent> {
        let (tx, rx) = mpsc::channel(self.queue_capacity);
        self.routes.write().await.insert(conn, tx);
        rx
    }

    /// Queues `event` for `conn`. Returns `true` if the event was
    /// accepted onto the queue.
    ///
    /// Misses are silent by design: no route (connection gone or never
    /// attached), receiver dropped, or queue full. The relay never
    /// reports a delivery miss back to the sender.
    pub async fn deliver(&self, conn: ConnId, event: ServerEvent) -> bool {
        let routes = self.routes.read().await;
        let Some(tx) = routes.get(&conn) else {
            return false;
        };
        match tx.try_send(event) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(conn = %conn, %err, "outbound event dropped");
                false
            }
        }
    }

    /// Removes the route for `conn`. No-op if already removed.
    pub async fn close(&self, conn: ConnId) {
        self.routes.write().await.remove(&conn);
    }
}
