//! Read-only status records for the HTTP layer.

use heapless::Vec;
use serde::Serialize;

use crate::station::MAX_STATIONS;

/// Point-in-time view of one station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot {
    /// Started and not stopped.
    pub running: bool,
    /// Settings allow new bursts.
    pub enabled: bool,
    /// Bursts completed since the last counter reset.
    pub completed_cycles: u32,
    /// Bursts planned per day.
    pub cycles_per_day: u32,
    /// Turns issued since the last counter reset.
    pub total_turns_today: f32,
    /// Configured daily target.
    pub target_turns_per_day: u32,
    /// Whole seconds until the next burst is due (0 if due, rotating or stopped).
    pub seconds_until_next_cycle: u64,
    /// A scheduled burst is in flight.
    pub is_currently_rotating: bool,
}

/// Whole-device status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatus {
    /// Seconds since the coordinator was created.
    pub uptime_seconds: u64,
    /// One snapshot per station, in station id order.
    pub stations: Vec<StatusSnapshot, MAX_STATIONS>,
}
