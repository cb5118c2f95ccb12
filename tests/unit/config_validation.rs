//! Unit tests for configuration validation.

use watch_winder::config::{validate_config, validate_settings, SystemConfig};
use watch_winder::error::{ConfigError, Error};
use watch_winder::MotorSettings;

/// Test validation of the reference defaults.
#[test]
fn test_valid_config_passes_validation() {
    assert!(validate_config(&SystemConfig::default()).is_ok());
    assert!(validate_settings(&MotorSettings::default()).is_ok());
}

#[test]
fn test_zero_turns_per_day() {
    let settings = MotorSettings {
        turns_per_day: 0,
        ..MotorSettings::default()
    };
    let err = validate_settings(&settings).unwrap_err();
    assert_eq!(err, Error::Config(ConfigError::InvalidTurnsPerDay(0)));
    assert!(err.is_invalid_settings());
}

#[test]
fn test_active_hours_bounds() {
    for hours in [0u8, 25, 255] {
        let settings = MotorSettings {
            active_hours: hours,
            ..MotorSettings::default()
        };
        assert_eq!(
            validate_settings(&settings),
            Err(Error::Config(ConfigError::InvalidActiveHours(hours)))
        );
    }

    for hours in [1u8, 24] {
        let settings = MotorSettings {
            active_hours: hours,
            ..MotorSettings::default()
        };
        assert!(validate_settings(&settings).is_ok());
    }
}

#[test]
fn test_zero_rotation_time() {
    let settings = MotorSettings {
        rotation_time_seconds: 0,
        ..MotorSettings::default()
    };
    assert_eq!(
        validate_settings(&settings),
        Err(Error::Config(ConfigError::InvalidRotationTime(0)))
    );
}

/// Zero rest is a valid back-to-back schedule.
#[test]
fn test_zero_rest_is_valid() {
    let settings = MotorSettings {
        rest_time_minutes: 0,
        ..MotorSettings::default()
    };
    assert!(validate_settings(&settings).is_ok());
}

#[test]
fn test_invalid_station_fails_whole_record() {
    let mut config = SystemConfig::default();
    config.stations[1].active_hours = 0;
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidActiveHours(0)))
    );
}

#[test]
fn test_zero_driver_parameters() {
    let config = SystemConfig {
        step_interval_ms: 0,
        ..SystemConfig::default()
    };
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidStepInterval(0)))
    );

    let config = SystemConfig {
        steps_per_revolution: 0,
        ..SystemConfig::default()
    };
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
    );
}
