//! Error types for the watch winder core.
//!
//! Every error is local to the call that produced it. Nothing here is fatal to
//! the cooperative loop: callers log or report the error and keep ticking.

use core::fmt;

use crate::station::StationId;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all watch winder operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing, validation or storage error
    Config(ConfigError),
    /// Coil output error
    Motor(MotorError),
    /// Station lookup or command error
    Station(StationError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Turns per day must be at least 1
    InvalidTurnsPerDay(u32),
    /// Active hours must be 1-24
    InvalidActiveHours(u8),
    /// Rotation time must be at least 1 second
    InvalidRotationTime(u32),
    /// Step interval must be at least 1 ms
    InvalidStepInterval(u32),
    /// Steps per revolution must be at least 1
    InvalidStepsPerRevolution(u32),
    /// Configured stations and supplied coil sets differ in number
    StationCountMismatch {
        /// Stations in the settings record
        configured: usize,
        /// Coil sets handed to the coordinator
        available: usize,
    },
    /// Unknown legacy direction code (valid: 0, 1, 2)
    InvalidDirectionCode(u8),
    /// Failed to parse or serialize the settings record
    ParseError(heapless::String<128>),
    /// Settings storage could not be read or written (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Coil output errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Writing a coil output failed
    PinError,
}

/// Station command errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StationError {
    /// The station's scheduler owns the motor for a rotation burst
    Busy(StationId),
    /// No station with this identifier
    NotFound(StationId),
    /// The coordinator already holds its maximum number of stations
    Full,
}

impl Error {
    /// Whether this error rejected a settings record (the settings were not applied).
    pub fn is_invalid_settings(&self) -> bool {
        matches!(
            self,
            Error::Config(
                ConfigError::InvalidTurnsPerDay(_)
                    | ConfigError::InvalidActiveHours(_)
                    | ConfigError::InvalidRotationTime(_)
            )
        )
    }

    /// Whether this error reports a station busy with a scheduled rotation.
    pub fn is_busy(&self) -> bool {
        matches!(self, Error::Station(StationError::Busy(_)))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Station(e) => write!(f, "Station error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTurnsPerDay(v) => {
                write!(f, "Invalid turns per day: {}. Must be >= 1", v)
            }
            ConfigError::InvalidActiveHours(v) => {
                write!(f, "Invalid active hours: {}. Must be 1-24", v)
            }
            ConfigError::InvalidRotationTime(v) => {
                write!(f, "Invalid rotation time: {} s. Must be >= 1", v)
            }
            ConfigError::InvalidStepInterval(v) => {
                write!(f, "Invalid step interval: {} ms. Must be >= 1", v)
            }
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be >= 1", v)
            }
            ConfigError::StationCountMismatch {
                configured,
                available,
            } => write!(
                f,
                "{} stations configured but {} coil sets available",
                configured, available
            ),
            ConfigError::InvalidDirectionCode(v) => {
                write!(f, "Invalid direction code: {}. Valid values: 0, 1, 2", v)
            }
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO coil write failed"),
        }
    }
}

impl fmt::Display for StationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationError::Busy(id) => write!(f, "Station {} is rotating on schedule", id),
            StationError::NotFound(id) => write!(f, "Station {} not found", id),
            StationError::Full => write!(f, "No room for another station"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<StationError> for Error {
    fn from(e: StationError) -> Self {
        Error::Station(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for StationError {}
