//! Configuration module for watch-winder.
//!
//! Provides the per-station settings record, the cycle timing derived from it,
//! validation, and (with `std`) TOML storage of the whole settings record.

#[cfg(feature = "std")]
mod loader;
mod schedule;
mod settings;
mod system;
mod validation;

pub use schedule::CycleSchedule;
pub use settings::{
    MotorSettings, DEFAULT_ACTIVE_HOURS, DEFAULT_REST_TIME_MINUTES,
    DEFAULT_ROTATION_TIME_SECONDS, DEFAULT_TURNS_PER_DAY,
};
pub use system::{SystemConfig, WifiCredentials, DEFAULT_DAY_LENGTH_HOURS, DEFAULT_STATION_COUNT};
pub use validation::{validate_config, validate_settings, MAX_ACTIVE_HOURS};

#[cfg(feature = "std")]
pub use loader::{load_config, load_or_default, parse_config, save_config, to_toml_string};
