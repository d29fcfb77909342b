//! The serialized entry record
//!
//! `Record` is the JSON object that crosses the socket. Field names and
//! declaration order are the agent contract; serde emits fields in
//! declaration order, which keeps encoded output stable for the agent and
//! for the tests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One entry as it appears on the wire
///
/// Built by the client from an `Entry`, consumed by [`crate::wire`]. The
/// `entry_type` and `level` fields are open wire codes: values outside the
/// [`crate::EntryType`] / [`crate::Level`] tables are carried as-is.
///
/// # Example
///
/// ```
/// use logflux_protocol::Record;
///
/// let json = r#"{
///     "id": "0e8c7a42-4b2f-4a2e-9f6e-1d2b3c4d5e6f",
///     "message": "disk almost full",
///     "source": "node-3",
///     "entry_type": 1,
///     "level": 4,
///     "timestamp": 1700000000,
///     "labels": {"mount": "/var"}
/// }"#;
///
/// let record: Record = serde_json::from_str(json).unwrap();
/// assert_eq!(record.level, 4);
/// assert_eq!(record.labels["mount"], "/var");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque unique identifier assigned at entry construction
    pub id: String,
    /// Arbitrary message payload
    pub message: String,
    /// Tag identifying the producing application
    pub source: String,
    /// Entry type code (1-5 for the known table; open integer on the wire)
    pub entry_type: u8,
    /// Syslog severity code (0-7 for the known table; open integer on the wire)
    pub level: u8,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
    /// String metadata labels, including the reserved `payload_type` key
    ///
    /// A `BTreeMap` so key order in the serialized object is deterministic;
    /// the agent attaches no meaning to label order.
    pub labels: BTreeMap<String, String>,
}
