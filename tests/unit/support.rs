//! Shared test doubles.

use watch_winder::error::MotorError;
use watch_winder::motor::{Coil, CoilOutputs};
use watch_winder::StepDriver;

/// Coil sink that remembers the last level of each coil.
#[derive(Debug, Default)]
pub struct RecordingCoils {
    pub levels: [bool; 4],
}

impl RecordingCoils {
    pub fn all_released(&self) -> bool {
        self.levels.iter().all(|level| !level)
    }
}

impl CoilOutputs for RecordingCoils {
    fn set_coil(&mut self, coil: Coil, energized: bool) -> Result<(), MotorError> {
        self.levels[coil as usize] = energized;
        Ok(())
    }
}

pub fn driver() -> StepDriver<RecordingCoils> {
    StepDriver::new(RecordingCoils::default())
}
