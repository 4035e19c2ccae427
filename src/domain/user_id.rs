//! Opaque logical user identity.
//!
//! [`UserId`] wraps the stable account identifier issued by the auth
//! collaborator. The relay never parses or validates it; it is only a
//! map key and a routing target.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable logical account identifier, opaque to the relay.
///
/// Supplied in the WebSocket handshake (`user_id` query parameter) from
/// the auth collaborator's session token. Used as the forward key in
/// [`super::PresenceRegistry`] and as the target of every routed event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wraps a raw identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is the empty string.
    ///
    /// An empty id is treated as a malformed handshake by the WebSocket
    /// layer, never registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
