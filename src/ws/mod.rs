//! WebSocket layer: connection handling, event routing, switchboard.
//!
//! The WebSocket endpoint at `/ws` is the relay's entire real-time
//! surface: one persistent connection per client, a four-event
//! vocabulary, and best-effort routing between live peers.

pub mod connection;
pub mod handler;
pub mod messages;
pub mod switchboard;

pub use switchboard::Switchboard;
