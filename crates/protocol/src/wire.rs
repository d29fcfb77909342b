//! Newline-delimited JSON framing
//!
//! The entire wire protocol: one JSON-encoded record per line, terminated
//! by a single `\n`. There is no length prefix and no acknowledgement; the
//! agent splits its inbound stream on newlines.

use crate::{ProtocolError, Record, Result};

/// Encode one record as a newline-terminated JSON line
///
/// The returned buffer ends with exactly one `\n`. serde_json escapes any
/// newline inside string values, so the delimiter can never appear in the
/// middle of a record.
///
/// # Errors
///
/// Returns [`ProtocolError::Encode`] if the record cannot be serialized.
pub fn encode(record: &Record) -> Result<Vec<u8>> {
    let mut line = serde_json::to_vec(record).map_err(ProtocolError::Encode)?;
    line.push(b'\n');
    Ok(line)
}

/// Decode one line (with or without its trailing newline) back into a record
///
/// The client never reads from the agent; this is the agent-side half of
/// the framing, kept here for tooling and round-trip tests.
///
/// # Errors
///
/// Returns [`ProtocolError::Decode`] if the line is not a well-formed
/// record.
pub fn decode_line(line: &str) -> Result<Record> {
    serde_json::from_str(line.trim_end_matches(['\r', '\n'])).map_err(ProtocolError::Decode)
}
