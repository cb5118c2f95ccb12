//! Per-station cycle scheduling.
//!
//! A [`CycleScheduler`] spreads a daily turn target over an active window as
//! fixed-length rotation bursts separated by rest periods.

mod cycle;
mod state;
mod status;

pub use cycle::CycleScheduler;
pub use state::SchedulerState;
pub use status::{StatusSnapshot, SystemStatus};
