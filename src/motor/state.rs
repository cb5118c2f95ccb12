//! Run state of a step driver.

use crate::motion::Rotation;
use crate::time::Millis;

/// Bookkeeping for a run in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunProgress {
    /// Effective direction of this run.
    pub rotation: Rotation,
    /// When the run started.
    pub started_at: Millis,
    /// Configured run length in milliseconds.
    pub duration_ms: u64,
    /// When the last phase transition happened (start time before the first).
    pub last_step_at: Millis,
}

impl RunProgress {
    /// Absolute end time of the run.
    #[inline]
    pub fn ends_at(&self) -> Millis {
        self.started_at.wrapping_add_ms(self.duration_ms)
    }

    /// Offset from start at which the next step falls due.
    #[inline]
    pub(crate) fn next_step_offset(&self, step_interval_ms: u64) -> u64 {
        self.last_step_at.since(self.started_at) + step_interval_ms
    }
}

/// Whether the driver is executing a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorRunState {
    /// Coils released, waiting for a run.
    #[default]
    Idle,
    /// Stepping until the run's end time.
    Running(RunProgress),
}

impl MotorRunState {
    /// Whether a run is in flight.
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, MotorRunState::Running(_))
    }

    /// State name for display/debugging.
    pub fn name(&self) -> &'static str {
        match self {
            MotorRunState::Idle => "Idle",
            MotorRunState::Running(_) => "Running",
        }
    }
}
