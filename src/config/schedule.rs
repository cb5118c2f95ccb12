//! Cycle timing derived from station settings.

use serde::Serialize;

use crate::time::{MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

use super::settings::MotorSettings;

/// Derived schedule parameters, recomputed whenever settings change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleSchedule {
    /// Rotation plus rest, in milliseconds.
    pub cycle_duration_ms: u64,

    /// Cycles that fit in the active window (at least 1).
    pub cycles_per_day: u32,

    /// Target turns per cycle. Informational: a burst turns however far the
    /// driver gets in the fixed rotation time.
    pub turns_per_cycle: f32,
}

impl CycleSchedule {
    /// Compute the schedule for validated settings.
    pub fn from_settings(settings: &MotorSettings) -> Self {
        let cycle_duration_ms = u64::from(settings.rotation_time_seconds) * MS_PER_SECOND
            + u64::from(settings.rest_time_minutes) * MS_PER_MINUTE;

        let active_ms = u64::from(settings.active_hours) * MS_PER_HOUR;

        let cycles_per_day = if cycle_duration_ms == 0 {
            1
        } else {
            (active_ms / cycle_duration_ms).clamp(1, u64::from(u32::MAX)) as u32
        };

        let turns_per_cycle = settings.turns_per_day as f32 / cycles_per_day as f32;

        Self {
            cycle_duration_ms,
            cycles_per_day,
            turns_per_cycle,
        }
    }
}

impl Default for CycleSchedule {
    fn default() -> Self {
        Self::from_settings(&MotorSettings::default())
    }
}
