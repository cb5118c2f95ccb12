//! Turns-per-day cycle scheduler.
//!
//! Decides once per tick whether a station idles, waits, or drives one
//! rotation burst on its [`StepDriver`]. All waiting is state: a tick never
//! blocks and does O(1) work.

use log::{debug, info, warn};

use crate::config::{validate_settings, CycleSchedule, MotorSettings};
use crate::error::{Result, StationError};
use crate::motion::{Direction, Rotation};
use crate::motor::{CoilOutputs, StepDriver};
use crate::station::StationId;
use crate::time::{Millis, MS_PER_SECOND};

use super::state::SchedulerState;
use super::status::StatusSnapshot;

/// Cycle scheduler for one station. Owns the station's driver.
#[derive(Debug)]
pub struct CycleScheduler<C: CoilOutputs> {
    /// Station identifier (for log lines and errors).
    id: StationId,

    /// The station's motor.
    driver: StepDriver<C>,

    /// Current validated settings.
    settings: MotorSettings,

    /// Timing derived from `settings`.
    schedule: CycleSchedule,

    /// Idle, Waiting or Rotating.
    state: SchedulerState,

    /// When the last burst started (or the armed "due now" time after start).
    last_cycle_at: Millis,

    /// Bursts completed since the last counter reset.
    completed_cycles: u32,

    /// Turns issued since the last counter reset.
    total_turns_today: f32,
}

impl<C: CoilOutputs> CycleScheduler<C> {
    /// Create a stopped scheduler with default settings.
    pub fn new(id: StationId, driver: StepDriver<C>) -> Self {
        let settings = MotorSettings::default();
        Self {
            id,
            driver,
            settings,
            schedule: CycleSchedule::from_settings(&settings),
            state: SchedulerState::Idle,
            last_cycle_at: Millis::default(),
            completed_cycles: 0,
            total_turns_today: 0.0,
        }
    }

    /// Create a stopped scheduler with the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid.
    pub fn with_settings(
        id: StationId,
        driver: StepDriver<C>,
        settings: MotorSettings,
    ) -> Result<Self> {
        let mut scheduler = Self::new(id, driver);
        scheduler.apply_settings(settings)?;
        Ok(scheduler)
    }

    /// Validate and store new settings.
    ///
    /// Recomputes the cycle timing and zeroes the daily counters. The
    /// running state is untouched; a burst in flight finishes normally.
    ///
    /// # Errors
    ///
    /// Returns an invalid-settings error and keeps the previous settings.
    pub fn apply_settings(&mut self, settings: MotorSettings) -> Result<()> {
        if let Err(e) = validate_settings(&settings) {
            warn!("station {}: settings rejected: {}", self.id, e);
            return Err(e);
        }

        self.settings = settings;
        self.schedule = CycleSchedule::from_settings(&settings);
        self.completed_cycles = 0;
        self.total_turns_today = 0.0;

        info!(
            "station {}: settings applied, {} cycles/day, {:.2} turns/cycle",
            self.id, self.schedule.cycles_per_day, self.schedule.turns_per_cycle
        );
        Ok(())
    }

    /// Start cycling. The first tick at or after `now` fires a burst.
    ///
    /// Starting while a burst is in flight leaves it running.
    pub fn start(&mut self, now: Millis) {
        if self.state == SchedulerState::Rotating {
            debug!("station {}: start ignored, burst in flight", self.id);
            return;
        }

        self.state = SchedulerState::Waiting;
        self.last_cycle_at = now.wrapping_sub_ms(self.schedule.cycle_duration_ms);
        info!("station {}: started", self.id);
    }

    /// Stop cycling and release the motor immediately.
    ///
    /// A burst cut short is not counted and its turns are discarded.
    pub fn stop(&mut self) -> Result<()> {
        if self.state == SchedulerState::Rotating {
            debug!(
                "station {}: discarding partial burst of {:.2} turns",
                self.id,
                self.driver.turns_completed()
            );
        }
        info!("station {}: stopped while {}", self.id, self.state.name());
        self.state = SchedulerState::Idle;
        self.driver.stop()
    }

    /// Advance the station by one loop iteration.
    ///
    /// Returns `Ok(true)` exactly on the tick where a scheduled burst completes.
    pub fn tick(&mut self, now: Millis) -> Result<bool> {
        match self.state {
            SchedulerState::Rotating => self.advance_burst(now),
            SchedulerState::Idle => {
                self.advance_manual_run(now)?;
                Ok(false)
            }
            SchedulerState::Waiting => {
                // A manual rotation holds the motor; the due burst waits for it.
                if self.driver.is_running() {
                    self.advance_manual_run(now)?;
                    return Ok(false);
                }

                if !self.settings.enabled {
                    return Ok(false);
                }

                if now.since(self.last_cycle_at) < self.schedule.cycle_duration_ms {
                    return Ok(false);
                }

                if self.completed_cycles >= self.schedule.cycles_per_day {
                    return Ok(false);
                }

                self.last_cycle_at = now;
                let rotation = self.driver.start_run(
                    now,
                    self.settings.rotation_time_seconds,
                    self.settings.direction,
                );
                self.state = SchedulerState::Rotating;
                debug!(
                    "station {}: burst {} started {:?}",
                    self.id,
                    self.completed_cycles + 1,
                    rotation
                );
                Ok(false)
            }
        }
    }

    fn advance_burst(&mut self, now: Millis) -> Result<bool> {
        let ticked = self.driver.tick(now);
        if self.driver.is_running() {
            return ticked.map(|_| false);
        }

        let turns = self.driver.turns_completed();
        self.total_turns_today += turns;
        self.completed_cycles += 1;
        self.state = SchedulerState::Waiting;

        info!(
            "station {}: cycle {}/{}, turns this cycle {:.2}, total {:.2}",
            self.id,
            self.completed_cycles,
            self.schedule.cycles_per_day,
            turns,
            self.total_turns_today
        );
        ticked.map(|_| true)
    }

    fn advance_manual_run(&mut self, now: Millis) -> Result<()> {
        if self.driver.is_running() {
            self.driver.tick(now)?;
        }
        Ok(())
    }

    /// Run the motor directly for `duration_secs`, outside the schedule.
    ///
    /// A `Bidirectional` request turns the way the next scheduled burst would,
    /// without flipping the alternation flag.
    ///
    /// # Errors
    ///
    /// Returns `StationError::Busy` while a scheduled burst is in flight.
    pub fn test_rotate(
        &mut self,
        now: Millis,
        duration_secs: u32,
        direction: Direction,
    ) -> Result<Rotation> {
        if self.state == SchedulerState::Rotating {
            warn!("station {}: test rotation refused, burst in flight", self.id);
            return Err(StationError::Busy(self.id).into());
        }

        let rotation = self.driver.next_rotation(direction);
        self.driver.start_run(now, duration_secs, rotation.into());
        info!(
            "station {}: test rotation {:?} for {} s",
            self.id, rotation, duration_secs
        );
        Ok(rotation)
    }

    /// Zero the daily counters without touching state or settings.
    pub fn reset_daily_counters(&mut self) {
        self.completed_cycles = 0;
        self.total_turns_today = 0.0;
        info!("station {}: daily counters reset", self.id);
    }

    /// Read-only status at `now`.
    pub fn status_snapshot(&self, now: Millis) -> StatusSnapshot {
        StatusSnapshot {
            running: self.state.is_running(),
            enabled: self.settings.enabled,
            completed_cycles: self.completed_cycles,
            cycles_per_day: self.schedule.cycles_per_day,
            total_turns_today: self.total_turns_today,
            target_turns_per_day: self.settings.turns_per_day,
            seconds_until_next_cycle: self.seconds_until_next_cycle(now),
            is_currently_rotating: self.state == SchedulerState::Rotating,
        }
    }

    fn seconds_until_next_cycle(&self, now: Millis) -> u64 {
        if self.state != SchedulerState::Waiting || !self.settings.enabled {
            return 0;
        }

        let elapsed = now.since(self.last_cycle_at);
        self.schedule.cycle_duration_ms.saturating_sub(elapsed) / MS_PER_SECOND
    }

    /// Station identifier.
    #[inline]
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Current settings.
    #[inline]
    pub fn settings(&self) -> &MotorSettings {
        &self.settings
    }

    /// Timing derived from the current settings.
    #[inline]
    pub fn schedule(&self) -> &CycleSchedule {
        &self.schedule
    }

    /// Bursts completed since the last counter reset.
    #[inline]
    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Turns issued since the last counter reset.
    #[inline]
    pub fn total_turns_today(&self) -> f32 {
        self.total_turns_today
    }

    /// Read access to the station's driver.
    #[inline]
    pub fn driver(&self) -> &StepDriver<C> {
        &self.driver
    }
}
