use chrono::{Local, TimeZone};
use procwatch::events::{EventLevel, EventLog};
use tempfile::tempdir;

#[test]
fn test_export_writes_header_and_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logs.csv");

    let timestamp = Local.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).single().unwrap();
    let mut log = EventLog::new();
    log.push_at(
        timestamp,
        EventLevel::Warning,
        "High CPU usage detected for chrome (PID: 4242)",
    );
    log.push_at(timestamp, EventLevel::Error, "Error monitoring system: gone");

    let rows = log.export_csv(&path).unwrap();
    assert_eq!(rows, 2);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Timestamp,Event");
    assert_eq!(
        lines[1],
        "2024-01-01 10:00:00,High CPU usage detected for chrome (PID: 4242)"
    );
    assert_eq!(lines[2], "2024-01-01 10:00:00,Error monitoring system: gone");
}

#[test]
fn test_export_of_empty_log_has_only_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    assert_eq!(EventLog::new().export_csv(&path).unwrap(), 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Timestamp,Event\n");
}

#[test]
fn test_export_failure_leaves_log_intact() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-subdir").join("logs.csv");
    let mut log = EventLog::new();
    log.info("Process monitoring started");
    assert!(log.export_csv(&path).is_err());
    assert_eq!(log.len(), 1);
}
