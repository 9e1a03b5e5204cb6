use procwatch::config::{MonitorConfig, ANOMALY_WINDOW, HISTORY_LEN, THRESHOLD_PERCENT};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_toml() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"update_interval_ms = 1000").unwrap();
    let config = MonitorConfig::load(file.path()).unwrap();
    assert_eq!(config.update_interval(), Duration::from_millis(1000));
}

#[test]
fn test_detection_parameters_in_file_are_ignored() {
    let toml_content = r#"
update_interval_ms = 750
history_len = 120
anomaly_window = 3
threshold_percent = 50.0
"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(toml_content.as_bytes()).unwrap();
    let config = MonitorConfig::load(file.path()).unwrap();
    assert_eq!(config, MonitorConfig { update_interval_ms: 750 });
    assert_eq!(HISTORY_LEN, 60);
    assert_eq!(ANOMALY_WINDOW, 5);
    assert_eq!(THRESHOLD_PERCENT, 80.0);
}

#[test]
fn test_sub_floor_interval_is_raised() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"update_interval_ms = 10").unwrap();
    let config = MonitorConfig::load(file.path()).unwrap();
    assert_eq!(config.update_interval(), sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"update_interval_ms = \"soon\"").unwrap();
    assert!(MonitorConfig::load(file.path()).is_err());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = MonitorConfig::load_or_default(Path::new("/definitely/not/here/procwatch.toml"));
    assert_eq!(config, MonitorConfig::default());
}
