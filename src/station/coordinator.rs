//! Multi-station coordinator.
//!
//! Holds every station's scheduler, samples the clock once per loop iteration
//! and fans each command out to the addressed station.

use heapless::Vec;
use log::{info, warn};

use crate::config::{
    validate_config, CycleSchedule, MotorSettings, SystemConfig, WifiCredentials,
    DEFAULT_DAY_LENGTH_HOURS,
};
use crate::error::{ConfigError, Error, Result, StationError};
use crate::motion::{Direction, Rotation, HALF_STEPS_PER_REVOLUTION};
use crate::motor::{CoilOutputs, StepDriver, StepDriverBuilder, DEFAULT_STEP_INTERVAL_MS};
use crate::scheduler::{CycleScheduler, StatusSnapshot, SystemStatus};
use crate::time::{Clock, Millis, MS_PER_HOUR, MS_PER_SECOND};

use super::id::{StationId, MAX_STATIONS};

/// Outcome of one coordinator tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickReport {
    /// Stations whose scheduled burst completed on this tick.
    pub completed: Vec<StationId, MAX_STATIONS>,
    /// Stations whose tick failed. The others were still ticked.
    pub faults: Vec<(StationId, Error), MAX_STATIONS>,
    /// Daily counters were reset before the stations were ticked.
    pub day_rolled_over: bool,
}

impl TickReport {
    /// Whether every station ticked without error.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

/// Owner of all stations and the injected clock.
///
/// Stations are independent: nothing one station does changes another's
/// timing or counters.
///
/// # Example
///
/// ```rust,ignore
/// use watch_winder::{load_or_default, StationCoordinator, Uln2003Coils};
///
/// let config = load_or_default("settings.toml");
/// let coils = [Uln2003Coils::new(a1, a2, a3, a4), Uln2003Coils::new(b1, b2, b3, b4)];
/// let mut winder = StationCoordinator::from_config(&config, clock, coils)?;
///
/// winder.start_all();
/// loop {
///     winder.poll();
///     // serve HTTP requests
/// }
/// ```
#[derive(Debug)]
pub struct StationCoordinator<C: CoilOutputs, K: Clock> {
    clock: K,
    stations: Vec<CycleScheduler<C>, MAX_STATIONS>,
    booted_at: Millis,
    day_started_at: Millis,
    day_length_hours: u8,
}

impl<C: CoilOutputs, K: Clock> StationCoordinator<C, K> {
    /// Create a coordinator with no stations.
    ///
    /// Uptime and the daily rollover are both anchored at the clock's current
    /// reading.
    pub fn new(clock: K) -> Self {
        let now = clock.now();
        Self {
            clock,
            stations: Vec::new(),
            booted_at: now,
            day_started_at: now,
            day_length_hours: DEFAULT_DAY_LENGTH_HOURS,
        }
    }

    /// Set the elapsed-time day length (0 disables the automatic reset).
    pub fn with_day_length_hours(mut self, hours: u8) -> Self {
        self.day_length_hours = hours;
        self
    }

    /// Build one station per configured settings entry, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the record fails validation or the number of coil
    /// sets differs from the number of configured stations.
    pub fn from_config<I>(config: &SystemConfig, clock: K, coils: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
    {
        validate_config(config)?;

        let mut coordinator = Self::new(clock).with_day_length_hours(config.day_length_hours);
        let configured = config.station_count();
        let mut coils = coils.into_iter();

        for settings in config.stations.iter() {
            let Some(station_coils) = coils.next() else {
                return Err(ConfigError::StationCountMismatch {
                    configured,
                    available: coordinator.station_count(),
                }
                .into());
            };

            let driver = StepDriverBuilder::new()
                .from_config(config)
                .coils(station_coils)
                .build()?;
            coordinator.add_station(driver, *settings)?;
        }

        let extra = coils.count();
        if extra > 0 {
            return Err(ConfigError::StationCountMismatch {
                configured,
                available: configured + extra,
            }
            .into());
        }

        Ok(coordinator)
    }

    /// Add a stopped station and return its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or the coordinator is full.
    pub fn add_station(&mut self, driver: StepDriver<C>, settings: MotorSettings) -> Result<StationId> {
        if self.stations.is_full() {
            return Err(StationError::Full.into());
        }

        let id = StationId::new(self.stations.len() as u8);
        let scheduler = CycleScheduler::with_settings(id, driver, settings)?;
        self.stations
            .push(scheduler)
            .map_err(|_| Error::Station(StationError::Full))?;

        info!("station {} added", id);
        Ok(id)
    }

    /// Number of stations.
    #[inline]
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Look up a station's scheduler.
    pub fn station(&self, id: StationId) -> Result<&CycleScheduler<C>> {
        self.stations
            .get(id.index())
            .ok_or(Error::Station(StationError::NotFound(id)))
    }

    fn station_mut(&mut self, id: StationId) -> Result<&mut CycleScheduler<C>> {
        self.stations
            .get_mut(id.index())
            .ok_or(Error::Station(StationError::NotFound(id)))
    }

    /// All stations in id order.
    pub fn stations(&self) -> impl Iterator<Item = &CycleScheduler<C>> {
        self.stations.iter()
    }

    /// Start one station.
    pub fn start(&mut self, id: StationId) -> Result<()> {
        let now = self.clock.now();
        self.station_mut(id)?.start(now);
        Ok(())
    }

    /// Stop one station and release its motor.
    pub fn stop(&mut self, id: StationId) -> Result<()> {
        self.station_mut(id)?.stop()
    }

    /// Start every station at the same instant.
    pub fn start_all(&mut self) {
        let now = self.clock.now();
        for station in self.stations.iter_mut() {
            station.start(now);
        }
    }

    /// Stop every station.
    ///
    /// Every station is stopped even if releasing one fails; the first
    /// failure is returned.
    pub fn stop_all(&mut self) -> Result<()> {
        let mut first_error = None;
        for station in self.stations.iter_mut() {
            if let Err(e) = station.stop() {
                warn!("station {}: release failed: {}", station.id(), e);
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Validate and apply new settings to one station.
    pub fn apply_settings(&mut self, id: StationId, settings: MotorSettings) -> Result<()> {
        self.station_mut(id)?.apply_settings(settings)
    }

    /// A station's current settings.
    pub fn settings(&self, id: StationId) -> Result<MotorSettings> {
        Ok(*self.station(id)?.settings())
    }

    /// A station's derived cycle timing.
    pub fn schedule(&self, id: StationId) -> Result<CycleSchedule> {
        Ok(*self.station(id)?.schedule())
    }

    /// A station's status at the current clock reading.
    pub fn status_snapshot(&self, id: StationId) -> Result<StatusSnapshot> {
        let now = self.clock.now();
        Ok(self.station(id)?.status_snapshot(now))
    }

    /// Run one station's motor outside its schedule.
    ///
    /// # Errors
    ///
    /// Returns `StationError::Busy` while that station's scheduled burst is in
    /// flight.
    pub fn test_rotate(
        &mut self,
        id: StationId,
        duration_secs: u32,
        direction: Direction,
    ) -> Result<Rotation> {
        let now = self.clock.now();
        self.station_mut(id)?.test_rotate(now, duration_secs, direction)
    }

    /// Zero one station's daily counters.
    pub fn reset_daily_counters(&mut self, id: StationId) -> Result<()> {
        self.station_mut(id)?.reset_daily_counters();
        Ok(())
    }

    /// Zero every station's daily counters and restart the day.
    pub fn reset_all_daily_counters(&mut self) {
        self.day_started_at = self.clock.now();
        for station in self.stations.iter_mut() {
            station.reset_daily_counters();
        }
    }

    /// Sample the clock once and tick every station with that reading.
    pub fn poll(&mut self) -> TickReport {
        let now = self.clock.now();
        self.tick_at(now)
    }

    /// Tick every station at `now`, in id order.
    ///
    /// A failing station is reported and skipped; the others still tick.
    pub fn tick_at(&mut self, now: Millis) -> TickReport {
        let mut report = TickReport {
            day_rolled_over: self.roll_day(now),
            ..TickReport::default()
        };

        for station in self.stations.iter_mut() {
            match station.tick(now) {
                Ok(true) => {
                    let _ = report.completed.push(station.id());
                }
                Ok(false) => {}
                Err(e) => {
                    warn!("station {}: tick failed: {}", station.id(), e);
                    let _ = report.faults.push((station.id(), e));
                }
            }
        }

        report
    }

    fn roll_day(&mut self, now: Millis) -> bool {
        if self.day_length_hours == 0 {
            return false;
        }

        let day_ms = u64::from(self.day_length_hours) * MS_PER_HOUR;
        let elapsed = now.since(self.day_started_at);
        if elapsed < day_ms {
            return false;
        }

        // Stay aligned to the original anchor even if polls were late.
        self.day_started_at = self.day_started_at.wrapping_add_ms(elapsed - elapsed % day_ms);
        for station in self.stations.iter_mut() {
            station.reset_daily_counters();
        }
        info!("day rolled over, daily counters reset");
        true
    }

    /// Whole seconds since the coordinator was created.
    pub fn uptime_seconds(&self) -> u64 {
        self.clock.now().since(self.booted_at) / MS_PER_SECOND
    }

    /// Uptime plus every station's snapshot, all at one clock reading.
    pub fn system_status(&self) -> SystemStatus {
        let now = self.clock.now();
        let mut stations = Vec::new();
        for station in self.stations.iter() {
            let _ = stations.push(station.status_snapshot(now));
        }

        SystemStatus {
            uptime_seconds: now.since(self.booted_at) / MS_PER_SECOND,
            stations,
        }
    }

    /// Build the persisted settings record from the live station settings.
    pub fn export_config(&self, wifi: &WifiCredentials) -> SystemConfig {
        let (step_interval_ms, steps_per_revolution) = self
            .stations
            .first()
            .map(|s| (s.driver().step_interval_ms(), s.driver().steps_per_revolution()))
            .unwrap_or((DEFAULT_STEP_INTERVAL_MS, HALF_STEPS_PER_REVOLUTION));

        let mut stations = Vec::new();
        for station in self.stations.iter() {
            let _ = stations.push(*station.settings());
        }

        SystemConfig {
            step_interval_ms,
            steps_per_revolution,
            day_length_hours: self.day_length_hours,
            wifi: wifi.clone(),
            stations,
        }
    }

    /// The injected clock.
    #[inline]
    pub fn clock(&self) -> &K {
        &self.clock
    }
}
