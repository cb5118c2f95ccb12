//! Configured and effective rotation directions.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Direction a station is configured to wind in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Always clockwise.
    #[default]
    Clockwise,
    /// Always counter-clockwise.
    CounterClockwise,
    /// Alternate on every new run.
    Bidirectional,
}

impl Direction {
    /// Legacy numeric code (0 = CW, 1 = CCW, 2 = bidirectional).
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Direction::Clockwise => 0,
            Direction::CounterClockwise => 1,
            Direction::Bidirectional => 2,
        }
    }

    /// The fixed rotation this direction names, if any.
    #[inline]
    pub const fn fixed(self) -> Option<Rotation> {
        match self {
            Direction::Clockwise => Some(Rotation::Clockwise),
            Direction::CounterClockwise => Some(Rotation::CounterClockwise),
            Direction::Bidirectional => None,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Direction::Clockwise),
            1 => Ok(Direction::CounterClockwise),
            2 => Ok(Direction::Bidirectional),
            other => Err(ConfigError::InvalidDirectionCode(other)),
        }
    }
}

impl From<Rotation> for Direction {
    fn from(rotation: Rotation) -> Self {
        match rotation {
            Rotation::Clockwise => Direction::Clockwise,
            Rotation::CounterClockwise => Direction::CounterClockwise,
        }
    }
}

/// The direction a single run actually turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// Clockwise (phase index increments).
    Clockwise,
    /// Counter-clockwise (phase index decrements).
    CounterClockwise,
}

impl Rotation {
    /// Get the opposite rotation.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }

    /// Phase index delta for one half-step.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Rotation::Clockwise => 1,
            Rotation::CounterClockwise => -1,
        }
    }
}
