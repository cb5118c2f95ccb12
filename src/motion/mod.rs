//! Motion module for watch-winder.
//!
//! Provides rotation directions and the half-step coil sequence.

mod direction;
mod sequence;

pub use direction::{Direction, Rotation};
pub use sequence::{
    PhaseIndex, StepPhase, HALF_STEPS_PER_REVOLUTION, HALF_STEP_SEQUENCE, PHASE_COUNT,
};
