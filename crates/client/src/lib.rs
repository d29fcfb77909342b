//! LogFlux Client SDK
//!
//! Ships structured records to a local LogFlux agent over a Unix-domain or
//! TCP stream socket. The agent speaks newline-delimited JSON; this crate is
//! the client half:
//!
//! - [`Entry`] - one structured record with fluent setters and payload-type
//!   factories
//! - [`Client`] - owns the socket, exposes connect/send/close
//!
//! # Quick Start
//!
//! ```no_run
//! use logflux_client::{Client, Entry, Level};
//!
//! let mut client = Client::unix("/run/logflux/agent.sock");
//! client.connect().unwrap();
//!
//! let entry = Entry::new("service started")
//!     .with_source("api-gateway")
//!     .with_level(Level::Notice)
//!     .with_label("env", "prod");
//!
//! client.send(&entry).unwrap();
//! client.close();
//! ```
//!
//! Factories preconfigure the reserved `payload_type` label for common
//! payload shapes:
//!
//! ```
//! use logflux_client::Entry;
//!
//! // Valid JSON is tagged generic_json, anything else generic.
//! let entry = Entry::generic(r#"{"event": "deploy", "ok": true}"#);
//! assert_eq!(entry.labels().get("payload_type").unwrap(), "generic_json");
//! ```
//!
//! # Connection Contract
//!
//! One `Client` owns one socket. `connect` is idempotent; `send` requires a
//! prior `connect` (there is no implicit connect). Any write failure tears
//! the connection down, so the next `send` fails fast with
//! [`ClientError::NotConnected`] until the caller reconnects. Dropping the
//! client closes the socket.
//!
//! All calls are synchronous and blocking, in call order, with no internal
//! queue or retry. A `Client` is not meant for concurrent use; serialize
//! access externally before sharing one across threads.

mod client;
mod entry;
mod error;

pub use client::{Client, Target};
pub use entry::{DEFAULT_SOURCE, Entry};
pub use error::{ClientError, Result};

// Re-export the wire vocabulary so callers need only one crate
pub use logflux_protocol::{EntryType, Level, PAYLOAD_TYPE_KEY, PayloadType, Record};

// Test modules - only compiled during testing
#[cfg(test)]
mod client_test;
