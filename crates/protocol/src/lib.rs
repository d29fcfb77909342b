//! LogFlux agent protocol - wire types for the LogFlux SDK
//!
//! This crate provides the types that cross the socket to a local LogFlux
//! agent:
//! - [`Record`] - one serialized entry (the JSON object on the wire)
//! - [`EntryType`] - Log, Metric, Trace, Event, Audit
//! - [`Level`] - syslog severity scale (Emergency..Debug)
//! - [`PayloadType`] - reserved `payload_type` label values
//! - [`wire`] - newline-delimited JSON framing
//!
//! # Wire Format
//!
//! One record per line, fire-and-forget:
//!
//! ```text
//! {"id":"...","message":"...","source":"...","entry_type":1,"level":6,"timestamp":1700000000,"labels":{}}\n
//! ```
//!
//! Field names and the integer code tables are the contract with the agent.
//! `entry_type` and `level` stay open integers on the wire so codes outside
//! the tables pass through to the agent uninterpreted.

mod error;
mod record;
mod types;
pub mod wire;

pub use error::ProtocolError;
pub use record::Record;
pub use types::{EntryType, Level, PayloadType};

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Reserved label key carrying the payload classification
pub const PAYLOAD_TYPE_KEY: &str = "payload_type";

#[cfg(test)]
mod record_test;
