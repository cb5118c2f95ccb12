//! Per-station winding settings.

use serde::{Deserialize, Serialize};

use crate::motion::Direction;

/// Default turns per day.
pub const DEFAULT_TURNS_PER_DAY: u32 = 650;
/// Default active window in hours.
pub const DEFAULT_ACTIVE_HOURS: u8 = 12;
/// Default rotation burst length in seconds.
pub const DEFAULT_ROTATION_TIME_SECONDS: u32 = 10;
/// Default rest between bursts in minutes.
pub const DEFAULT_REST_TIME_MINUTES: u32 = 5;

/// Winding settings for one station, as stored and as edited by the operator.
///
/// Field names match the TOML settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorSettings {
    /// Whether the scheduler may start new bursts.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Winding direction.
    #[serde(default)]
    pub direction: Direction,

    /// Target full turns per day (>= 1).
    #[serde(default = "default_turns_per_day")]
    pub turns_per_day: u32,

    /// Hours per day the station winds (1-24).
    #[serde(default = "default_active_hours")]
    pub active_hours: u8,

    /// Length of each rotation burst in seconds (>= 1).
    #[serde(default = "default_rotation_time")]
    pub rotation_time_seconds: u32,

    /// Rest after each burst in minutes.
    #[serde(default = "default_rest_time")]
    pub rest_time_minutes: u32,
}

fn default_enabled() -> bool {
    true
}

fn default_turns_per_day() -> u32 {
    DEFAULT_TURNS_PER_DAY
}

fn default_active_hours() -> u8 {
    DEFAULT_ACTIVE_HOURS
}

fn default_rotation_time() -> u32 {
    DEFAULT_ROTATION_TIME_SECONDS
}

fn default_rest_time() -> u32 {
    DEFAULT_REST_TIME_MINUTES
}

impl Default for MotorSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            direction: Direction::Clockwise,
            turns_per_day: DEFAULT_TURNS_PER_DAY,
            active_hours: DEFAULT_ACTIVE_HOURS,
            rotation_time_seconds: DEFAULT_ROTATION_TIME_SECONDS,
            rest_time_minutes: DEFAULT_REST_TIME_MINUTES,
        }
    }
}
