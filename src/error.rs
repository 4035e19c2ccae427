//! Relay error types.
//!
//! [`RelayError`] covers startup failures only. Routing-level
//! conditions (target offline, connection closed mid-flight) are
//! deliberately not errors: they are silent drops, and the relay never
//! reports them to the sender.

/// Fatal startup errors.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// `LISTEN_ADDR` could not be parsed as a socket address.
    #[error("invalid listen address: {0}")]
    InvalidListenAddr(#[from] std::net::AddrParseError),

    /// Binding or serving the listener failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
