//! Entry classification types
//!
//! The integer code tables for `entry_type` and `level` are part of the
//! agent contract and must not be renumbered. The wire itself carries open
//! integers; these enums are the API-boundary convenience over them, which
//! is why `from_u8` returns `Option` instead of clamping unknown codes.

use std::fmt;

/// Entry type codes (wire values 1-5)
///
/// Classifies what kind of record an entry carries. Codes outside this
/// table are legal on the wire and are passed through to the agent
/// uninterpreted rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum EntryType {
    /// Standard log line
    #[default]
    Log = 1,
    /// Metric sample
    Metric = 2,
    /// Distributed tracing span
    Trace = 3,
    /// Discrete application event
    Event = 4,
    /// Audit trail record
    Audit = 5,
}

impl EntryType {
    /// Convert to the wire code
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parse a wire code, `None` for codes outside the table
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Log),
            2 => Some(Self::Metric),
            3 => Some(Self::Trace),
            4 => Some(Self::Event),
            5 => Some(Self::Audit),
            _ => None,
        }
    }

    /// Get the string name of this entry type
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Metric => "metric",
            Self::Trace => "trace",
            Self::Event => "event",
            Self::Audit => "audit",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log severity levels (RFC 5424 syslog scale, wire values 0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// System is unusable
    Emergency = 0,
    /// Action must be taken immediately
    Alert = 1,
    /// Critical conditions
    Critical = 2,
    /// Error conditions
    Error = 3,
    /// Warning conditions
    Warning = 4,
    /// Normal but significant condition
    Notice = 5,
    /// Informational messages
    #[default]
    Info = 6,
    /// Debug-level messages
    Debug = 7,
}

impl Level {
    /// Convert to the wire code
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parse a wire code, `None` for codes outside the table
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Emergency),
            1 => Some(Self::Alert),
            2 => Some(Self::Critical),
            3 => Some(Self::Error),
            4 => Some(Self::Warning),
            5 => Some(Self::Notice),
            6 => Some(Self::Info),
            7 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Get the string name of this level
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reserved `payload_type` label values assigned by the entry factories
///
/// Callers remain free to store arbitrary other strings under the
/// `payload_type` label; this table only covers the values the SDK itself
/// assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadType {
    /// systemd journal export record
    SystemdJournal,
    /// Raw syslog line
    Syslog,
    /// Metric sample payload
    Metrics,
    /// Application-structured content
    Application,
    /// Container runtime output
    Container,
    /// Free-form text
    Generic,
    /// Free-form content that parses as JSON
    GenericJson,
}

impl PayloadType {
    /// Get the label value for this payload type
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SystemdJournal => "systemd_journal",
            Self::Syslog => "syslog",
            Self::Metrics => "metrics",
            Self::Application => "application",
            Self::Container => "container",
            Self::Generic => "generic",
            Self::GenericJson => "generic_json",
        }
    }
}

impl fmt::Display for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<PayloadType> for String {
    fn from(payload_type: PayloadType) -> Self {
        payload_type.as_str().to_owned()
    }
}
