//! Entry construction
//!
//! [`Entry`] is one structured record destined for the agent. Construction
//! assigns an id and capture timestamp; fluent setters adjust the rest.
//! Factories preconfigure the reserved `payload_type` label for common
//! payload shapes.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use logflux_protocol::{EntryType, Level, PAYLOAD_TYPE_KEY, PayloadType, ProtocolError, Record};
use uuid::Uuid;

/// Source tag applied when the caller does not set one
pub const DEFAULT_SOURCE: &str = "sdk";

/// One structured record destined for the agent
///
/// Setters move the entry and return it, so construction chains:
///
/// ```
/// use logflux_client::{Entry, EntryType, Level};
///
/// let entry = Entry::new("cache evicted 412 keys")
///     .with_source("cache-01")
///     .with_type(EntryType::Event)
///     .with_level(Level::Notice)
///     .with_label("region", "eu-west-1");
///
/// assert_eq!(entry.source(), "cache-01");
/// assert_eq!(entry.level(), 5);
/// ```
///
/// `entry_type` and `level` are stored as open integers. The typed setters
/// cover the agent's code tables; the `*_raw` setters pass any code through
/// unvalidated for forward compatibility with newer agents.
#[derive(Debug, Clone)]
pub struct Entry {
    id: String,
    message: String,
    source: String,
    entry_type: u8,
    level: u8,
    timestamp: u64,
    labels: BTreeMap<String, String>,
}

impl Entry {
    /// Create an entry with defaults: a fresh UUID id, source
    /// [`DEFAULT_SOURCE`], type Log, level Info, timestamp now, no labels
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            source: DEFAULT_SOURCE.to_string(),
            entry_type: EntryType::Log.as_u8(),
            level: Level::Info.as_u8(),
            timestamp: unix_now(),
            labels: BTreeMap::new(),
        }
    }

    // =========================================================================
    // Factories
    // =========================================================================

    /// Entry for free-form payloads
    ///
    /// Tags `payload_type` as `generic_json` when the message itself is
    /// well-formed JSON (trimmed, non-empty), otherwise `generic`.
    #[must_use]
    pub fn generic(message: impl Into<String>) -> Self {
        let message = message.into();
        let payload_type = if is_valid_json(&message) {
            PayloadType::GenericJson
        } else {
            PayloadType::Generic
        };
        Self::new(message).with_payload_type(payload_type)
    }

    /// Entry carrying a syslog line
    #[must_use]
    pub fn syslog(message: impl Into<String>) -> Self {
        Self::new(message).with_payload_type(PayloadType::Syslog)
    }

    /// Entry carrying a systemd journal export record
    #[must_use]
    pub fn systemd_journal(message: impl Into<String>) -> Self {
        Self::new(message).with_payload_type(PayloadType::SystemdJournal)
    }

    /// Metric entry: type Metric, `payload_type` = `metrics`
    #[must_use]
    pub fn metric(message: impl Into<String>) -> Self {
        Self::new(message)
            .with_type(EntryType::Metric)
            .with_payload_type(PayloadType::Metrics)
    }

    /// Entry carrying structured application output
    #[must_use]
    pub fn application(message: impl Into<String>) -> Self {
        Self::new(message).with_payload_type(PayloadType::Application)
    }

    /// Entry carrying container runtime output
    #[must_use]
    pub fn container(message: impl Into<String>) -> Self {
        Self::new(message).with_payload_type(PayloadType::Container)
    }

    // =========================================================================
    // Fluent setters
    // =========================================================================

    /// Set the source application tag
    #[inline]
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the entry type
    #[inline]
    #[must_use]
    pub fn with_type(self, entry_type: EntryType) -> Self {
        self.with_type_raw(entry_type.as_u8())
    }

    /// Set the entry type from a raw wire code
    ///
    /// Codes outside the [`EntryType`] table pass through to the agent
    /// uninterpreted.
    #[inline]
    #[must_use]
    pub fn with_type_raw(mut self, entry_type: u8) -> Self {
        self.entry_type = entry_type;
        self
    }

    /// Set the severity level
    #[inline]
    #[must_use]
    pub fn with_level(self, level: Level) -> Self {
        self.with_level_raw(level.as_u8())
    }

    /// Set the severity from a raw wire code
    ///
    /// Codes outside the [`Level`] table pass through to the agent
    /// uninterpreted.
    #[inline]
    #[must_use]
    pub fn with_level_raw(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Override the capture timestamp (seconds since Unix epoch)
    #[inline]
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set one label; setting a key again replaces its value
    #[inline]
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Set the reserved `payload_type` label
    ///
    /// Sugar for `with_label("payload_type", value)`. Accepts [`PayloadType`]
    /// or any string; a later call replaces the value, including one set by a
    /// factory.
    #[inline]
    #[must_use]
    pub fn with_payload_type(self, value: impl Into<String>) -> Self {
        self.with_label(PAYLOAD_TYPE_KEY, value)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Unique identifier assigned at construction
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Message payload
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source application tag
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Entry type wire code
    #[inline]
    pub fn entry_type(&self) -> u8 {
        self.entry_type
    }

    /// Severity level wire code
    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Capture timestamp (seconds since Unix epoch)
    #[inline]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Label map, read-only
    #[inline]
    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Produce the wire record for this entry
    #[must_use]
    pub fn to_record(&self) -> Record {
        Record {
            id: self.id.clone(),
            message: self.message.clone(),
            source: self.source.clone(),
            entry_type: self.entry_type,
            level: self.level,
            timestamp: self.timestamp,
            labels: self.labels.clone(),
        }
    }

    /// Serialize the wire record to a JSON string, without the newline
    /// delimiter the send path appends
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Encode`] if the record cannot be encoded.
    pub fn to_json(&self) -> logflux_protocol::Result<String> {
        serde_json::to_string(&self.to_record()).map_err(ProtocolError::Encode)
    }
}

/// Well-formedness check behind [`Entry::generic`]
///
/// A string counts as JSON iff, after trimming surrounding whitespace, it is
/// non-empty and parses under the standard JSON grammar. Scalars qualify.
fn is_valid_json(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    serde_json::from_str::<serde_json::Value>(trimmed).is_ok()
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
