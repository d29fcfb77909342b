//! Tests for the wire record type

use std::collections::BTreeMap;

use crate::record::Record;

fn sample_record() -> Record {
    let mut labels = BTreeMap::new();
    labels.insert("env".to_string(), "prod".to_string());
    labels.insert("payload_type".to_string(), "application".to_string());

    Record {
        id: "0b8f3c2a-8a1e-4c5b-9f0d-3d2a1b4c5d6e".to_string(),
        message: "request handled".to_string(),
        source: "api".to_string(),
        entry_type: 1,
        level: 6,
        timestamp: 1_700_000_000,
        labels,
    }
}

#[test]
fn test_record_serialize_field_order() {
    let record = sample_record();
    let json = serde_json::to_string(&record).unwrap();

    // Agents key on field order when scanning the frame prefix.
    let id_pos = json.find("\"id\"").unwrap();
    let message_pos = json.find("\"message\"").unwrap();
    let source_pos = json.find("\"source\"").unwrap();
    let entry_type_pos = json.find("\"entry_type\"").unwrap();
    let level_pos = json.find("\"level\"").unwrap();
    let timestamp_pos = json.find("\"timestamp\"").unwrap();
    let labels_pos = json.find("\"labels\"").unwrap();

    assert!(id_pos < message_pos);
    assert!(message_pos < source_pos);
    assert!(source_pos < entry_type_pos);
    assert!(entry_type_pos < level_pos);
    assert!(level_pos < timestamp_pos);
    assert!(timestamp_pos < labels_pos);
}

#[test]
fn test_record_serialize_numeric_codes() {
    let record = sample_record();
    let json = serde_json::to_string(&record).unwrap();

    assert!(json.contains("\"entry_type\":1"));
    assert!(json.contains("\"level\":6"));
    assert!(json.contains("\"timestamp\":1700000000"));
}

#[test]
fn test_record_deserialize() {
    let json = r#"{
        "id": "abc-123",
        "message": "disk full",
        "source": "node-3",
        "entry_type": 4,
        "level": 2,
        "timestamp": 1700000001,
        "labels": {"payload_type": "syslog"}
    }"#;

    let record: Record = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, "abc-123");
    assert_eq!(record.message, "disk full");
    assert_eq!(record.source, "node-3");
    assert_eq!(record.entry_type, 4);
    assert_eq!(record.level, 2);
    assert_eq!(record.timestamp, 1_700_000_001);
    assert_eq!(record.labels.get("payload_type").unwrap(), "syslog");
}

#[test]
fn test_record_roundtrip() {
    let record = sample_record();
    let json = serde_json::to_string(&record).unwrap();
    let parsed: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn test_record_empty_labels() {
    let record = Record {
        id: "x".to_string(),
        message: String::new(),
        source: "sdk".to_string(),
        entry_type: 1,
        level: 6,
        timestamp: 0,
        labels: BTreeMap::new(),
    };

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"labels\":{}"));
    assert!(json.contains("\"message\":\"\""));
}

#[test]
fn test_record_labels_sorted_by_key() {
    let mut labels = BTreeMap::new();
    labels.insert("zone".to_string(), "b".to_string());
    labels.insert("app".to_string(), "web".to_string());

    let record = Record { labels, ..sample_record() };
    let json = serde_json::to_string(&record).unwrap();

    let app_pos = json.find("\"app\"").unwrap();
    let zone_pos = json.find("\"zone\"").unwrap();
    assert!(app_pos < zone_pos);
}

#[test]
fn test_record_out_of_range_codes_still_serialize() {
    let record = Record { entry_type: 99, level: 250, ..sample_record() };
    let json = serde_json::to_string(&record).unwrap();

    assert!(json.contains("\"entry_type\":99"));
    assert!(json.contains("\"level\":250"));
}
