//! Integration tests for loading display settings from disk.

use std::collections::HashMap;
use std::io::Write;

use sunshine::forecast::{WeatherAlert, WeatherCondition, format_temperature, format_wind};
use sunshine::settings::{DisplaySettings, Units};
use sunshine::SettingsError;

fn write_settings(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_settings(
        r#"
        location = "Mountain View, CA"
        units = "imperial"
        art_pack = "https://art.example.com/%s.png"
        min_location_length = 3
        alert_sender_id = "1234567890"
        "#,
    );

    let settings = DisplaySettings::load(file.path()).unwrap();

    assert_eq!(settings.location, "Mountain View, CA");
    assert_eq!(settings.units, Units::Imperial);
    assert!(!settings.using_local_graphics());
    assert_eq!(
        settings.art_url(WeatherCondition::Fog).as_deref(),
        Some("https://art.example.com/fog.png")
    );
    assert_eq!(format_temperature(25.0, settings.units), "77°");
    assert_eq!(format_wind(16.0, 45.0, settings.units), "Wind: 10 mph NE");
}

#[test]
fn test_loaded_sender_gates_alerts() {
    let file = write_settings(r#"alert_sender_id = "1234567890""#);
    let settings = DisplaySettings::load(file.path()).unwrap();

    let data: HashMap<String, String> = [("weather", "Tornado"), ("location", "Kansas")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let alert = WeatherAlert::from_message("1234567890", &data, &settings).unwrap();
    assert_eq!(alert.text(), "Heads up: Tornado in Kansas!");
    assert!(WeatherAlert::from_message("0000", &data, &settings).is_none());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = DisplaySettings::load(&path).unwrap_err();
    match err {
        SettingsError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = write_settings("units = [");
    let err = DisplaySettings::load(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
}

#[test]
fn test_invalid_value_is_reported_by_field() {
    let file = write_settings("min_location_length = 0");
    let err = DisplaySettings::load(file.path()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value for setting 'min_location_length': must be at least 1"
    );
}
