//! Coil output capability.
//!
//! The driver never touches GPIO directly. It writes coil levels through
//! [`CoilOutputs`], which board code implements over real pins (see
//! [`Uln2003Coils`]) and tests implement with a recording sink.

use embedded_hal::digital::OutputPin;

use crate::error::MotorError;
use crate::motion::StepPhase;

/// One of the four coil inputs of a unipolar stepper driver board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Coil {
    /// IN1
    In1,
    /// IN2
    In2,
    /// IN3
    In3,
    /// IN4
    In4,
}

impl Coil {
    /// All coils in sequence-table order.
    pub const ALL: [Coil; 4] = [Coil::In1, Coil::In2, Coil::In3, Coil::In4];
}

/// Write access to one motor's four coils.
pub trait CoilOutputs {
    /// Energize (`true`) or release (`false`) a single coil.
    fn set_coil(&mut self, coil: Coil, energized: bool) -> Result<(), MotorError>;

    /// Drive all four coils to a sequence phase.
    fn apply(&mut self, phase: StepPhase) -> Result<(), MotorError> {
        for (coil, level) in Coil::ALL.into_iter().zip(phase.coils()) {
            self.set_coil(coil, level)?;
        }
        Ok(())
    }

    /// Release every coil.
    ///
    /// Attempts all four writes even if one fails, then reports the first failure.
    fn release(&mut self) -> Result<(), MotorError> {
        let mut result = Ok(());
        for (coil, level) in Coil::ALL.into_iter().zip(StepPhase::RELEASED.coils()) {
            if let Err(e) = self.set_coil(coil, level) {
                result = result.and(Err(e));
            }
        }
        result
    }
}

/// Four GPIO outputs wired to a ULN2003 darlington board.
///
/// Generic over the pin types so each input may come from a different port.
#[derive(Debug)]
pub struct Uln2003Coils<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    in1: IN1,
    in2: IN2,
    in3: IN3,
    in4: IN4,
}

impl<IN1, IN2, IN3, IN4> Uln2003Coils<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    /// Wrap four output pins, IN1 first.
    pub fn new(in1: IN1, in2: IN2, in3: IN3, in4: IN4) -> Self {
        Self { in1, in2, in3, in4 }
    }

    /// Give the pins back.
    pub fn release_pins(self) -> (IN1, IN2, IN3, IN4) {
        (self.in1, self.in2, self.in3, self.in4)
    }
}

fn write_pin<P: OutputPin>(pin: &mut P, energized: bool) -> Result<(), MotorError> {
    if energized {
        pin.set_high().map_err(|_| MotorError::PinError)
    } else {
        pin.set_low().map_err(|_| MotorError::PinError)
    }
}

impl<IN1, IN2, IN3, IN4> CoilOutputs for Uln2003Coils<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    fn set_coil(&mut self, coil: Coil, energized: bool) -> Result<(), MotorError> {
        match coil {
            Coil::In1 => write_pin(&mut self.in1, energized),
            Coil::In2 => write_pin(&mut self.in2, energized),
            Coil::In3 => write_pin(&mut self.in3, energized),
            Coil::In4 => write_pin(&mut self.in4, energized),
        }
    }
}
