//! Recording coil sink for unit tests.

use crate::error::MotorError;

use super::coils::{Coil, CoilOutputs};

#[derive(Debug, Default)]
pub(crate) struct RecordingCoils {
    pub(crate) levels: [bool; 4],
    pub(crate) writes: usize,
    pub(crate) fail: bool,
}

impl RecordingCoils {
    pub(crate) fn all_released(&self) -> bool {
        self.levels.iter().all(|level| !level)
    }
}

impl CoilOutputs for RecordingCoils {
    fn set_coil(&mut self, coil: Coil, energized: bool) -> Result<(), MotorError> {
        if self.fail {
            return Err(MotorError::PinError);
        }
        self.levels[coil as usize] = energized;
        self.writes += 1;
        Ok(())
    }
}
