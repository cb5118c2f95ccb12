//! Half-step coil sequence for four-coil unipolar steppers (28BYJ-48 on ULN2003).

use super::direction::Rotation;

/// Number of phases in the half-step sequence.
pub const PHASE_COUNT: usize = 8;

/// Half-steps per output shaft revolution of the reference geared motor.
pub const HALF_STEPS_PER_REVOLUTION: u32 = 4076;

/// Energization of the four coils (IN1..IN4) for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepPhase(pub [bool; 4]);

impl StepPhase {
    /// All coils off.
    pub const RELEASED: Self = Self([false; 4]);

    /// Coil levels, IN1 first.
    #[inline]
    pub const fn coils(self) -> [bool; 4] {
        self.0
    }
}

/// The half-step sequence, one or two adjacent coils energized per phase.
pub const HALF_STEP_SEQUENCE: [StepPhase; PHASE_COUNT] = [
    StepPhase([true, false, false, false]),
    StepPhase([true, true, false, false]),
    StepPhase([false, true, false, false]),
    StepPhase([false, true, true, false]),
    StepPhase([false, false, true, false]),
    StepPhase([false, false, true, true]),
    StepPhase([false, false, false, true]),
    StepPhase([true, false, false, true]),
];

/// Cursor into [`HALF_STEP_SEQUENCE`], cyclic modulo [`PHASE_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseIndex(u8);

impl PhaseIndex {
    /// Create an index, reduced modulo [`PHASE_COUNT`].
    #[inline]
    pub const fn new(index: u8) -> Self {
        Self(index % PHASE_COUNT as u8)
    }

    /// Get the raw index.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The index one half-step away in `rotation`.
    #[inline]
    pub const fn advanced(self, rotation: Rotation) -> Self {
        let len = PHASE_COUNT as i8;
        let next = (self.0 as i8 + rotation.sign()).rem_euclid(len);
        Self(next as u8)
    }

    /// Coil pattern at this index.
    #[inline]
    pub const fn phase(self) -> StepPhase {
        HALF_STEP_SEQUENCE[self.0 as usize]
    }
}
