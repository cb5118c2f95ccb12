//! # watch-winder
//!
//! Non-blocking control core for a two-station automatic watch winder driving
//! 28BYJ-48 steppers through ULN2003 boards, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Cooperative**: every operation returns promptly; the outer loop polls
//! - **Turns-per-day scheduling**: a daily target spread over an active window
//!   as rotation bursts separated by rests
//! - **embedded-hal 1.0**: coils are driven through four `OutputPin`s
//! - **no_std compatible**: core library works without standard library
//! - **Injected time**: a [`Clock`] is sampled once per loop iteration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use watch_winder::{StationCoordinator, StationId, Uln2003Coils};
//!
//! // Load settings from TOML, falling back to defaults
//! let config = watch_winder::load_or_default("settings.toml");
//!
//! // One coil set per configured station
//! let coils = [Uln2003Coils::new(a1, a2, a3, a4), Uln2003Coils::new(b1, b2, b3, b4)];
//! let mut winder = StationCoordinator::from_config(&config, clock, coils)?;
//!
//! winder.start(StationId::new(0))?;
//! loop {
//!     winder.poll();
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt formatting for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;
pub mod scheduler;
pub mod station;
pub mod time;

// Re-exports for ergonomic API
pub use config::{
    validate_config, validate_settings, CycleSchedule, MotorSettings, SystemConfig,
    WifiCredentials,
};
pub use error::{Error, Result};
pub use motion::{Direction, Rotation};
pub use motor::{CoilOutputs, StepDriver, StepDriverBuilder, Uln2003Coils};
pub use scheduler::{CycleScheduler, SchedulerState, StatusSnapshot, SystemStatus};
pub use station::{StationCoordinator, StationId, TickReport, MAX_STATIONS};
pub use time::{Clock, ManualClock, Millis};

// Settings storage (std only)
#[cfg(feature = "std")]
pub use config::{load_config, load_or_default, parse_config, save_config};
