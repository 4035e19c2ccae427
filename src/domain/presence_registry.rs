//! In-memory bidirectional presence map.
//!
//! [`PresenceRegistry`] tracks which WebSocket connection currently
//! represents each logical user. Both directions of the mapping live
//! behind a single [`tokio::sync::RwLock`]; every operation is an O(1)
//! map access and the lock is never held across transport I/O.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{ConnId, UserId};

/// Both directions of the presence mapping, mutated together so they
/// can never disagree.
#[derive(Debug, Default)]
struct PresenceMaps {
    by_user: HashMap<UserId, ConnId>,
    by_conn: HashMap<ConnId, UserId>,
}

/// Live `UserId ↔ ConnId` mapping for all attached connections.
///
/// Invariants:
/// - At most one [`ConnId`] per [`UserId`] at any instant. A second
///   attach for the same user replaces the first; the superseded
///   connection stays open at the transport level but is no longer
///   routable.
/// - Every forward entry has exactly one matching inverse entry.
///
/// State is purely in-memory: nothing survives a restart, and presence
/// means exactly "connection is open" — no timers, no expiry.
#[derive(Debug, Default)]
pub struct PresenceRegistry {
    inner: RwLock<PresenceMaps>,
}

impl PresenceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `conn` as the current connection for `user`.
    ///
    /// If `user` already has a connection it is silently replaced; the
    /// old connection is not notified and not closed. The stale inverse
    /// entry is dropped so a later detach of the old connection is a
    /// no-op.
    pub async fn attach(&self, user: UserId, conn: ConnId) {
        let mut maps = self.inner.write().await;
        if let Some(old) = maps.by_user.insert(user.clone(), conn) {
            maps.by_conn.remove(&old);
            tracing::debug!(user = %user, old_conn = %old, new_conn = %conn, "presence superseded");
        }
        maps.by_conn.insert(conn, user);
    }

    /// Returns the live connection for `user`, or `None` if the user is
    /// not currently attached.
    ///
    /// `None` is the normal "offline" outcome, not a fault.
    pub async fn resolve(&self, user: &UserId) -> Option<ConnId> {
        self.inner.read().await.by_user.get(user).copied()
    }

    /// Removes the entry owned by `conn`, both directions.
    ///
    /// Keyed by connection because the transport layer only knows which
    /// socket closed. No-op if `conn` was never attached or was already
    /// superseded by a later attach for the same user. Idempotent.
    pub async fn detach(&self, conn: ConnId) {
        let mut maps = self.inner.write().await;
        if let Some(user) = maps.by_conn.remove(&conn) {
            maps.by_user.remove(&user);
        }
    }

    /// Returns the number of currently attached users.
    pub async fn online_count(&self) -> usize {
        self.inner.read().await.by_user.len()
    }
}
