//! Connection lifecycle and the send protocol
//!
//! [`Client`] owns exactly one stream socket to a local agent, Unix-domain or
//! TCP, fixed at construction by [`Target`]. All I/O is synchronous and
//! blocking. The send path is fire-and-forget: one JSON line per entry,
//! nothing read back from the agent.

use std::fmt;
use std::io::{self, Write};
use std::net::TcpStream;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

use logflux_protocol::wire;
use tracing::{debug, trace};

use crate::entry::Entry;
use crate::error::{ClientError, Result};

/// Connection target, fixed at construction
///
/// Exactly one transport kind per client; the variants make the exclusivity
/// a compile-time invariant. Holding a `Target` performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Filesystem path to a Unix-domain stream socket
    Unix(PathBuf),
    /// TCP host and port
    Tcp {
        /// Hostname or IP address of the agent
        host: String,
        /// Agent listen port
        port: u16,
    },
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Unix(path) => write!(f, "unix://{}", path.display()),
            Target::Tcp { host, port } => write!(f, "tcp://{host}:{port}"),
        }
    }
}

/// Live transport handle, present only while connected
#[derive(Debug)]
enum Conn {
    Unix(UnixStream),
    Tcp(TcpStream),
}

impl Conn {
    /// Write one frame in full; short writes keep going or error
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        let stream: &mut dyn Write = match self {
            Conn::Unix(stream) => stream,
            Conn::Tcp(stream) => stream,
        };
        stream.write_all(frame)?;
        stream.flush()
    }
}

/// Client owning one socket to a local agent
///
/// # Example
///
/// ```no_run
/// use logflux_client::{Client, Entry};
///
/// let mut client = Client::tcp("127.0.0.1", 9090);
/// client.connect().unwrap();
/// client.send(&Entry::syslog("<34>1 - - - - - - reboot")).unwrap();
/// ```
///
/// The connection is a scoped resource: acquired in [`connect`], released
/// exactly once in [`close`], on a failed send, or on drop.
///
/// [`connect`]: Client::connect
/// [`close`]: Client::close
#[derive(Debug)]
pub struct Client {
    target: Target,
    conn: Option<Conn>,
}

impl Client {
    /// Client for a Unix-domain socket path
    #[must_use]
    pub fn unix(path: impl Into<PathBuf>) -> Self {
        Self::new(Target::Unix(path.into()))
    }

    /// Client for a TCP host and port
    #[must_use]
    pub fn tcp(host: impl Into<String>, port: u16) -> Self {
        Self::new(Target::Tcp {
            host: host.into(),
            port,
        })
    }

    /// Client for an explicit target
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self { target, conn: None }
    }

    /// Configured connection target
    #[inline]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Open the transport to the configured target
    ///
    /// No-op when already connected.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Connection`] when the socket cannot be created
    /// or the connect handshake fails. No handle is retained on failure.
    pub fn connect(&mut self) -> Result<()> {
        if self.conn.is_some() {
            trace!(agent = %self.target, "connect on live connection, no-op");
            return Ok(());
        }

        let conn = match &self.target {
            Target::Unix(path) => UnixStream::connect(path).map(Conn::Unix),
            Target::Tcp { host, port } => {
                TcpStream::connect((host.as_str(), *port)).and_then(|stream| {
                    stream.set_nodelay(true)?;
                    Ok(Conn::Tcp(stream))
                })
            }
        }
        .map_err(|source| ClientError::connection(self.target.to_string(), source))?;

        debug!(agent = %self.target, "connected");
        self.conn = Some(conn);
        Ok(())
    }

    /// Serialize one entry and write it to the agent as a single JSON line
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotConnected`] when called before [`connect`]; no
    ///   transport handle is created
    /// - [`ClientError::Encode`] when the record cannot be serialized; the
    ///   connection is untouched
    /// - [`ClientError::Io`] when the write fails; the connection is torn
    ///   down before the error returns, so the client must [`connect`] again
    ///
    /// [`connect`]: Client::connect
    pub fn send(&mut self, entry: &Entry) -> Result<()> {
        let Some(conn) = self.conn.as_mut() else {
            return Err(ClientError::NotConnected);
        };

        let frame = wire::encode(&entry.to_record())?;

        if let Err(source) = conn.write_frame(&frame) {
            // Fail fast: the stream is unusable after any write error.
            self.conn = None;
            return Err(ClientError::Io(source));
        }

        trace!(entry_id = %entry.id(), bytes = frame.len(), "entry written");
        Ok(())
    }

    /// True while a transport handle is held
    #[inline]
    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Release the transport handle if present
    ///
    /// Idempotent and infallible; close errors from the OS are swallowed.
    pub fn close(&mut self) {
        if self.conn.take().is_some() {
            debug!(agent = %self.target, "connection closed");
        }
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        self.close();
    }
}
