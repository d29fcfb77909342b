//! Protocol error types

use thiserror::Error;

/// Errors that can occur when encoding or decoding records
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The record could not be serialized to JSON
    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),

    /// The line could not be parsed back into a record
    #[error("failed to decode record: {0}")]
    Decode(#[source] serde_json::Error),
}
