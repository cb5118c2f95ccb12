//! Millisecond timestamps and the injected clock.
//!
//! The core never reads a global clock. The outer loop samples a [`Clock`] once
//! per iteration and passes the resulting [`Millis`] down to every component, so
//! a scheduler's due check and its driver's end check see the same instant.

use core::cell::Cell;

/// Milliseconds in one second.
pub const MS_PER_SECOND: u64 = 1_000;
/// Milliseconds in one minute.
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
/// Milliseconds in one hour.
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// A reading of a free-running millisecond counter.
///
/// Differences are computed with wrapping arithmetic, the way a hardware tick
/// counter is read, so `now - d` is a valid timestamp even before `d` ms have
/// elapsed since boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u64);

impl Millis {
    /// Create a new timestamp.
    #[inline]
    pub const fn new(ms: u64) -> Self {
        Self(ms)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    #[inline]
    pub const fn since(self, earlier: Millis) -> u64 {
        self.0.wrapping_sub(earlier.0)
    }

    /// The timestamp `ms` milliseconds before `self`.
    #[inline]
    pub const fn wrapping_sub_ms(self, ms: u64) -> Millis {
        Millis(self.0.wrapping_sub(ms))
    }

    /// The timestamp `ms` milliseconds after `self`.
    #[inline]
    pub const fn wrapping_add_ms(self, ms: u64) -> Millis {
        Millis(self.0.wrapping_add(ms))
    }
}

/// Source of monotonically increasing milliseconds.
pub trait Clock {
    /// Current time.
    fn now(&self) -> Millis;
}

impl<K: Clock + ?Sized> Clock for &K {
    fn now(&self) -> Millis {
        (**self).now()
    }
}

/// A clock that only moves when told to.
///
/// Used for host-side simulation and deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Create a clock reading `start` ms.
    pub fn new(start: u64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Set the current reading.
    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    /// Advance by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        Millis::new(self.now.get())
    }
}
