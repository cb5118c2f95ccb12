//! Scheduler states.

/// Where a station is in its cycle.
///
/// Idle →(start)→ Waiting →(due, under daily target)→ Rotating →(driver
/// finished)→ Waiting, and stop returns to Idle from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerState {
    /// Stopped.
    #[default]
    Idle,
    /// Running, resting between bursts.
    Waiting,
    /// Running, a burst is in flight on the driver.
    Rotating,
}

impl SchedulerState {
    /// Whether the station has been started and not stopped.
    #[inline]
    pub fn is_running(self) -> bool {
        !matches!(self, SchedulerState::Idle)
    }

    /// State name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            SchedulerState::Idle => "Idle",
            SchedulerState::Waiting => "Waiting",
            SchedulerState::Rotating => "Rotating",
        }
    }
}
