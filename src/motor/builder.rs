//! Builder pattern for StepDriver.

use crate::config::SystemConfig;
use crate::error::{ConfigError, Error, Result};
use crate::motion::HALF_STEPS_PER_REVOLUTION;

use super::coils::CoilOutputs;
use super::driver::{StepDriver, DEFAULT_STEP_INTERVAL_MS};

/// Builder for creating StepDriver instances.
#[derive(Debug)]
pub struct StepDriverBuilder<C: CoilOutputs> {
    coils: Option<C>,
    step_interval_ms: u32,
    steps_per_revolution: u32,
}

impl<C: CoilOutputs> Default for StepDriverBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CoilOutputs> StepDriverBuilder<C> {
    /// Create a new builder with the reference motor's defaults.
    pub fn new() -> Self {
        Self {
            coils: None,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            steps_per_revolution: HALF_STEPS_PER_REVOLUTION,
        }
    }

    /// Set the coil outputs.
    pub fn coils(mut self, coils: C) -> Self {
        self.coils = Some(coils);
        self
    }

    /// Set the minimum time between phase transitions.
    pub fn step_interval_ms(mut self, ms: u32) -> Self {
        self.step_interval_ms = ms;
        self
    }

    /// Set half-steps per output revolution.
    pub fn steps_per_revolution(mut self, steps: u32) -> Self {
        self.steps_per_revolution = steps;
        self
    }

    /// Take driver parameters from a SystemConfig.
    pub fn from_config(mut self, config: &SystemConfig) -> Self {
        self.step_interval_ms = config.step_interval_ms;
        self.steps_per_revolution = config.steps_per_revolution;
        self
    }

    /// Build the StepDriver.
    ///
    /// # Errors
    ///
    /// Returns an error if the coils are missing or a parameter is zero.
    pub fn build(self) -> Result<StepDriver<C>> {
        let coils = self.coils.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("coils are required").unwrap_or_default(),
            ))
        })?;

        if self.step_interval_ms == 0 {
            return Err(ConfigError::InvalidStepInterval(self.step_interval_ms).into());
        }

        if self.steps_per_revolution == 0 {
            return Err(ConfigError::InvalidStepsPerRevolution(self.steps_per_revolution).into());
        }

        Ok(StepDriver::with_parameters(
            coils,
            self.step_interval_ms,
            self.steps_per_revolution,
        ))
    }
}
