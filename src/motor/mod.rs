//! Motor module for watch-winder.
//!
//! Provides the non-blocking half-step driver and its coil output capability.

mod builder;
mod coils;
mod driver;
#[cfg(test)]
pub(crate) mod mock;
mod state;

pub use builder::StepDriverBuilder;
pub use coils::{Coil, CoilOutputs, Uln2003Coils};
pub use driver::{StepDriver, DEFAULT_STEP_INTERVAL_MS};
pub use state::{MotorRunState, RunProgress};
