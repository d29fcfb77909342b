//! Tests for Client construction and offline lifecycle
//!
//! Anything that needs a live listener on the other end of the socket lives
//! in `tests/agent.rs`.

use std::path::PathBuf;

use crate::{Client, ClientError, Entry, Target};

// =============================================================================
// Construction and targets
// =============================================================================

#[test]
fn test_unix_constructor_target() {
    let client = Client::unix("/run/logflux/agent.sock");
    assert_eq!(
        client.target(),
        &Target::Unix(PathBuf::from("/run/logflux/agent.sock"))
    );
}

#[test]
fn test_tcp_constructor_target() {
    let client = Client::tcp("127.0.0.1", 9090);
    assert_eq!(
        client.target(),
        &Target::Tcp {
            host: "127.0.0.1".to_string(),
            port: 9090,
        }
    );
}

#[test]
fn test_new_with_explicit_target() {
    let target = Target::Tcp {
        host: "agent.internal".to_string(),
        port: 514,
    };
    let client = Client::new(target.clone());
    assert_eq!(client.target(), &target);
}

#[test]
fn test_construction_performs_no_io() {
    // A target nothing listens on is fine until connect.
    let client = Client::unix("/nonexistent/logflux.sock");
    assert!(!client.is_connected());
}

#[test]
fn test_target_display_unix() {
    let target = Target::Unix(PathBuf::from("/run/logflux/agent.sock"));
    assert_eq!(target.to_string(), "unix:///run/logflux/agent.sock");
}

#[test]
fn test_target_display_tcp() {
    let target = Target::Tcp {
        host: "localhost".to_string(),
        port: 9090,
    };
    assert_eq!(target.to_string(), "tcp://localhost:9090");
}

// =============================================================================
// Offline lifecycle
// =============================================================================

#[test]
fn test_send_before_connect_fails() {
    let mut client = Client::tcp("127.0.0.1", 9090);
    let result = client.send(&Entry::new("early"));

    assert!(matches!(result, Err(ClientError::NotConnected)));
    assert!(!client.is_connected());
}

#[test]
fn test_connect_to_missing_unix_socket_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.sock");

    let mut client = Client::unix(&path);
    let result = client.connect();

    assert!(matches!(result, Err(ClientError::Connection { .. })));
    assert!(!client.is_connected());
}

#[test]
fn test_connect_failure_names_target() {
    let dir = tempfile::tempdir().unwrap();
    let mut client = Client::unix(dir.path().join("missing.sock"));

    let err = client.connect().unwrap_err();
    assert!(err.to_string().starts_with("failed to connect to unix://"));
}

#[test]
fn test_close_without_connection_is_noop() {
    let mut client = Client::tcp("127.0.0.1", 9090);
    client.close();
    client.close();
    assert!(!client.is_connected());
}

#[test]
fn test_send_after_failed_connect_reports_not_connected() {
    let dir = tempfile::tempdir().unwrap();
    let mut client = Client::unix(dir.path().join("missing.sock"));

    assert!(client.connect().is_err());
    let result = client.send(&Entry::new("never leaves"));
    assert!(matches!(result, Err(ClientError::NotConnected)));
}
