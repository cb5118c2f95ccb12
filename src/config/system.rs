//! System configuration - root of the persisted settings record.

use heapless::{String, Vec};
use serde::{Deserialize, Serialize};

use crate::motion::HALF_STEPS_PER_REVOLUTION;
use crate::motor::DEFAULT_STEP_INTERVAL_MS;
use crate::station::{StationId, MAX_STATIONS};

use super::settings::MotorSettings;

/// Stations on the reference board.
pub const DEFAULT_STATION_COUNT: usize = 2;

/// Default elapsed-time day length for the automatic counter reset.
pub const DEFAULT_DAY_LENGTH_HOURS: u8 = 24;

/// Network credentials carried in the settings record.
///
/// The core never uses these; they ride along so the persistence layer can
/// store one record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct WifiCredentials {
    /// Network name (empty means "start the setup access point").
    #[serde(default)]
    pub ssid: String<32>,

    /// Network passphrase.
    #[serde(default)]
    pub password: String<64>,
}

/// Root settings record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SystemConfig {
    /// Minimum time between phase transitions for every station's driver.
    #[serde(default = "default_step_interval")]
    pub step_interval_ms: u32,

    /// Half-steps per output revolution.
    #[serde(default = "default_steps_per_revolution")]
    pub steps_per_revolution: u32,

    /// Elapsed hours after which daily counters reset (0 disables).
    #[serde(default = "default_day_length")]
    pub day_length_hours: u8,

    /// Network credentials.
    #[serde(default)]
    pub wifi: WifiCredentials,

    /// Per-station settings, in station id order.
    #[serde(default = "default_stations")]
    pub stations: Vec<MotorSettings, MAX_STATIONS>,
}

fn default_step_interval() -> u32 {
    DEFAULT_STEP_INTERVAL_MS
}

fn default_steps_per_revolution() -> u32 {
    HALF_STEPS_PER_REVOLUTION
}

fn default_day_length() -> u8 {
    DEFAULT_DAY_LENGTH_HOURS
}

fn default_stations() -> Vec<MotorSettings, MAX_STATIONS> {
    let mut stations = Vec::new();
    for _ in 0..DEFAULT_STATION_COUNT {
        let _ = stations.push(MotorSettings::default());
    }
    stations
}

impl SystemConfig {
    /// Get a station's settings by id.
    pub fn station(&self, id: StationId) -> Option<&MotorSettings> {
        self.stations.get(id.index())
    }

    /// Number of configured stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            steps_per_revolution: HALF_STEPS_PER_REVOLUTION,
            day_length_hours: DEFAULT_DAY_LENGTH_HOURS,
            wifi: WifiCredentials::default(),
            stations: default_stations(),
        }
    }
}
