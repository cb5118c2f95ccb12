//! Station identifiers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Most stations one coordinator can hold.
pub const MAX_STATIONS: usize = 8;

/// Zero-based index of a station within its coordinator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize, Serialize,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct StationId(u8);

impl StationId {
    /// Create a station id.
    #[inline]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Position in the coordinator's station list.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for StationId {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
