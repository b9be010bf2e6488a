//! Loading `period.toml` from disk and applying it to intervals.

use std::fs;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use period::{BoundaryType, Interval, PeriodConfig, PeriodError};

#[test]
fn test_config_file_drives_construction_and_rendering() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("period.toml");
    fs::write(
        &path,
        r#"
[interval]
default_boundary = "[]"

[format]
datetime = "%Y-%m-%d"
"#,
    )
    .unwrap();

    let config = PeriodConfig::from_file(&path).unwrap();
    let start = Utc.with_ymd_and_hms(2012, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2012, 1, 31, 0, 0, 0).unwrap();

    let january = Interval::with_config(start, end, &config).unwrap();
    assert_eq!(january.boundary_type(), BoundaryType::IncludeAll);
    assert_eq!(january.render(&config).unwrap(), "[2012-01-01, 2012-01-31]");
}

#[test]
fn test_default_config_renders_rfc3339() {
    let config = PeriodConfig::default();
    let start = Utc.with_ymd_and_hms(2012, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2012, 1, 2, 0, 0, 0).unwrap();

    let day = Interval::with_config(start, end, &config).unwrap();
    assert_eq!(day.render(&config).unwrap(), day.to_string());
}

#[test]
fn test_missing_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let result = PeriodConfig::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(PeriodError::Configuration(_))));
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("period.toml");
    fs::write(&path, "[interval]\ndefault_boundary = 3\n").unwrap();
    assert!(matches!(
        PeriodConfig::from_file(&path),
        Err(PeriodError::Configuration(_))
    ));
}
