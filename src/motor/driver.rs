//! Non-blocking half-step driver.
//!
//! A run is started with [`StepDriver::start_run`] and then advanced by calling
//! [`StepDriver::tick`] from the outer loop. Each tick does at most one phase
//! transition and never waits.

use log::debug;

use crate::error::{ConfigError, Result};
use crate::motion::{Direction, PhaseIndex, Rotation, HALF_STEPS_PER_REVOLUTION};
use crate::time::{Millis, MS_PER_SECOND};

use super::coils::CoilOutputs;
use super::state::{MotorRunState, RunProgress};

/// Default minimum time between phase transitions (~7 RPM on a 28BYJ-48).
pub const DEFAULT_STEP_INTERVAL_MS: u32 = 2;

/// Time-sliced driver for one four-coil stepper.
///
/// Owns the coil outputs exclusively. Stepping is open loop: the step counter
/// reports issued steps, not confirmed motion.
#[derive(Debug)]
pub struct StepDriver<C: CoilOutputs> {
    /// Coil outputs (IN1..IN4).
    coils: C,

    /// Current position in the half-step sequence.
    phase: PhaseIndex,

    /// Minimum time between phase transitions.
    step_interval_ms: u32,

    /// Half-steps per output revolution.
    steps_per_revolution: u32,

    /// Idle or running.
    state: MotorRunState,

    /// Rotation of the most recent bidirectional run.
    last_direction: Rotation,

    /// Steps issued by the most recent (or current) run.
    steps_taken: u32,
}

impl<C: CoilOutputs> StepDriver<C> {
    /// Create an idle driver with the reference motor's defaults.
    pub fn new(coils: C) -> Self {
        Self::with_parameters(coils, DEFAULT_STEP_INTERVAL_MS, HALF_STEPS_PER_REVOLUTION)
    }

    pub(crate) fn with_parameters(
        coils: C,
        step_interval_ms: u32,
        steps_per_revolution: u32,
    ) -> Self {
        Self {
            coils,
            phase: PhaseIndex::default(),
            step_interval_ms,
            steps_per_revolution,
            state: MotorRunState::Idle,
            // First bidirectional run flips this to clockwise.
            last_direction: Rotation::CounterClockwise,
            steps_taken: 0,
        }
    }

    /// Set the minimum time between successive phase transitions.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStepInterval` if `step_interval_ms` is zero.
    pub fn configure(&mut self, step_interval_ms: u32) -> Result<()> {
        if step_interval_ms == 0 {
            return Err(ConfigError::InvalidStepInterval(step_interval_ms).into());
        }
        self.step_interval_ms = step_interval_ms;
        Ok(())
    }

    /// Minimum time between phase transitions.
    #[inline]
    pub fn step_interval_ms(&self) -> u32 {
        self.step_interval_ms
    }

    /// Half-steps per output revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution
    }

    /// The rotation a run started with `direction` would use, without starting it.
    pub fn next_rotation(&self, direction: Direction) -> Rotation {
        direction
            .fixed()
            .unwrap_or_else(|| self.last_direction.opposite())
    }

    /// Begin a run of `duration_secs` seconds.
    ///
    /// `Bidirectional` flips the persisted alternation flag and uses the new
    /// value; fixed directions leave the flag untouched.
    ///
    /// Precondition: the driver is idle. Starting over an active run restarts it.
    pub fn start_run(&mut self, now: Millis, duration_secs: u32, direction: Direction) -> Rotation {
        let rotation = self.next_rotation(direction);
        if direction == Direction::Bidirectional {
            self.last_direction = rotation;
        }

        self.steps_taken = 0;
        self.state = MotorRunState::Running(RunProgress {
            rotation,
            started_at: now,
            duration_ms: u64::from(duration_secs) * MS_PER_SECOND,
            last_step_at: now,
        });

        debug!("run started: {:?} for {} s", rotation, duration_secs);
        rotation
    }

    /// Advance the current run by at most one phase.
    ///
    /// Returns `Ok(true)` while the run continues and `Ok(false)` when idle,
    /// including the tick on which the run finishes and the coils are released.
    ///
    /// The run finishes on the first tick at or past its end time. A tick landing
    /// exactly on the end time still issues an outstanding step due within the
    /// run window, and the run finishes on the next tick. A late tick issues one step, not a catch-up
    /// burst.
    pub fn tick(&mut self, now: Millis) -> Result<bool> {
        let run = match self.state {
            MotorRunState::Idle => return Ok(false),
            MotorRunState::Running(run) => run,
        };

        let interval = u64::from(self.step_interval_ms);
        let past_end = now.since(run.started_at) > run.duration_ms;
        let step_due_by_end = run.next_step_offset(interval) <= run.duration_ms;

        if past_end || (now == run.ends_at() && !step_due_by_end) {
            self.state = MotorRunState::Idle;
            debug!("run finished after {} steps", self.steps_taken);
            self.coils.release()?;
            return Ok(false);
        }

        if now.since(run.last_step_at) >= interval {
            let next = self.phase.advanced(run.rotation);
            self.coils.apply(next.phase())?;
            self.phase = next;
            self.steps_taken = self.steps_taken.saturating_add(1);
            self.state = MotorRunState::Running(RunProgress {
                last_step_at: now,
                ..run
            });
        }

        Ok(true)
    }

    /// Release the coils and go idle, whatever the current state.
    pub fn stop(&mut self) -> Result<()> {
        debug!("stop requested while {}", self.state.name());
        self.state = MotorRunState::Idle;
        self.coils.release()?;
        Ok(())
    }

    /// Turns issued by the most recent or current run.
    #[inline]
    pub fn turns_completed(&self) -> f32 {
        self.steps_taken as f32 / self.steps_per_revolution as f32
    }

    /// Steps issued by the most recent or current run.
    #[inline]
    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    /// Rotation used by the most recent bidirectional run.
    #[inline]
    pub fn last_direction(&self) -> Rotation {
        self.last_direction
    }

    /// Whether a run is in flight.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Current run state.
    #[inline]
    pub fn state(&self) -> &MotorRunState {
        &self.state
    }

    /// Current position in the half-step sequence.
    #[inline]
    pub fn phase(&self) -> PhaseIndex {
        self.phase
    }

    /// Read access to the coil outputs.
    #[inline]
    pub fn coils(&self) -> &C {
        &self.coils
    }

    /// Give back the coil outputs.
    pub fn release(self) -> C {
        self.coils
    }
}
