//! Unit tests for settings record parsing.

use watch_winder::config::{parse_config, to_toml_string, SystemConfig};
use watch_winder::error::{ConfigError, Error};
use watch_winder::{Direction, MotorSettings, StationId};

/// A record with every field spelled out.
#[test]
fn test_parse_full_record() {
    let toml_str = r#"
step_interval_ms = 2
steps_per_revolution = 4076
day_length_hours = 24

[wifi]
ssid = "workshop"
password = "tourbillon"

[[stations]]
enabled = true
direction = "bidirectional"
turns_per_day = 650
active_hours = 12
rotation_time_seconds = 10
rest_time_minutes = 5

[[stations]]
enabled = false
direction = "counter_clockwise"
turns_per_day = 900
active_hours = 8
rotation_time_seconds = 20
rest_time_minutes = 2
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.station_count(), 2);
    assert_eq!(config.wifi.password.as_str(), "tourbillon");

    let second = config.station(StationId::new(1)).unwrap();
    assert!(!second.enabled);
    assert_eq!(second.direction, Direction::CounterClockwise);
    assert_eq!(second.turns_per_day, 900);
    assert_eq!(second.active_hours, 8);
    assert_eq!(second.rotation_time_seconds, 20);
    assert_eq!(second.rest_time_minutes, 2);
}

/// Missing fields take the reference defaults.
#[test]
fn test_partial_station_uses_defaults() {
    let toml_str = r#"
[[stations]]
turns_per_day = 800
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.station_count(), 1);

    let settings = config.station(StationId::new(0)).unwrap();
    assert_eq!(
        *settings,
        MotorSettings {
            turns_per_day: 800,
            ..MotorSettings::default()
        }
    );
    assert_eq!(config.step_interval_ms, 2);
    assert_eq!(config.steps_per_revolution, 4076);
    assert_eq!(config.day_length_hours, 24);
}

#[test]
fn test_missing_station_table_gives_two_stations() {
    let config = parse_config("day_length_hours = 0").unwrap();
    assert_eq!(config.station_count(), 2);
    assert_eq!(config.day_length_hours, 0);
    assert!(config.wifi.ssid.is_empty());
}

#[test]
fn test_malformed_toml() {
    let result = parse_config("[[stations]\nenabled = ");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

#[test]
fn test_wrong_field_type() {
    let toml_str = r#"
[[stations]]
turns_per_day = "lots"
"#;
    assert!(parse_config(toml_str).is_err());
}

#[test]
fn test_rendered_record_parses_back() {
    let mut config = SystemConfig::default();
    config.stations[1].enabled = false;
    config.stations[1].rest_time_minutes = 0;

    let text = to_toml_string(&config).unwrap();
    assert!(text.contains("[[stations]]"));
    assert_eq!(parse_config(&text).unwrap(), config);
}

#[test]
fn test_legacy_direction_codes() {
    assert_eq!(Direction::try_from(0u8), Ok(Direction::Clockwise));
    assert_eq!(Direction::try_from(1u8), Ok(Direction::CounterClockwise));
    assert_eq!(Direction::try_from(2u8), Ok(Direction::Bidirectional));
    assert_eq!(
        Direction::try_from(3u8),
        Err(ConfigError::InvalidDirectionCode(3))
    );
    assert_eq!(Direction::Bidirectional.code(), 2);
}
