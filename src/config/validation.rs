//! Configuration validation.

use crate::error::{ConfigError, Result};

use super::{MotorSettings, SystemConfig};

/// Longest active window in hours.
pub const MAX_ACTIVE_HOURS: u8 = 24;

/// Validate one station's settings.
///
/// Checks:
/// - Turns per day is at least 1
/// - Active hours is 1-24
/// - Rotation time is at least 1 second
pub fn validate_settings(settings: &MotorSettings) -> Result<()> {
    if settings.turns_per_day == 0 {
        return Err(ConfigError::InvalidTurnsPerDay(settings.turns_per_day).into());
    }

    if settings.active_hours == 0 || settings.active_hours > MAX_ACTIVE_HOURS {
        return Err(ConfigError::InvalidActiveHours(settings.active_hours).into());
    }

    if settings.rotation_time_seconds == 0 {
        return Err(ConfigError::InvalidRotationTime(settings.rotation_time_seconds).into());
    }

    Ok(())
}

/// Validate a system configuration.
///
/// Checks driver parameters and every station's settings.
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    if config.step_interval_ms == 0 {
        return Err(ConfigError::InvalidStepInterval(config.step_interval_ms).into());
    }

    if config.steps_per_revolution == 0 {
        return Err(ConfigError::InvalidStepsPerRevolution(config.steps_per_revolution).into());
    }

    for settings in config.stations.iter() {
        validate_settings(settings)?;
    }

    Ok(())
}
