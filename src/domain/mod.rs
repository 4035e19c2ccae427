//! Domain layer: identity types and the presence registry.
//!
//! This module contains the relay's entire in-memory model: opaque
//! user and connection identities and the bidirectional presence map
//! binding them.

pub mod conn_id;
pub mod presence_registry;
pub mod user_id;

pub use conn_id::ConnId;
pub use presence_registry::PresenceRegistry;
pub use user_id::UserId;
