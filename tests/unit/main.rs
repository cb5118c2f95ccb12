//! Unit test harness for watch-winder.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod config_validation;
mod driver_pacing;
mod scheduler_properties;
mod support;
