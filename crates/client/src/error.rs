//! Error types for the client
//!
//! Every failure surfaces synchronously to the caller of the failing
//! operation; nothing is retried or logged internally. `close` has no error
//! path at all.

use logflux_protocol::ProtocolError;
use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by [`Client`](crate::Client) operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// `send` called before a successful `connect`
    #[error("not connected to agent; call connect() first")]
    NotConnected,

    /// Socket creation or connect handshake failed
    #[error("failed to connect to {target}: {source}")]
    Connection {
        /// Rendered connection target (socket path or host:port)
        target: String,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// The record could not be encoded to JSON; connection state unaffected
    #[error(transparent)]
    Encode(#[from] ProtocolError),

    /// Writing to the transport failed; the connection was torn down
    #[error("failed to write to agent: {0}")]
    Io(#[source] std::io::Error),
}

impl ClientError {
    /// Create a Connection error
    pub fn connection(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::Connection {
            target: target.into(),
            source,
        }
    }
}
