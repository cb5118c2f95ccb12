//! Settings record storage (std only).
//!
//! Storage failures never stop the winder: [`load_or_default`] logs and falls
//! back to the built-in defaults, and the caller keeps running on them.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

fn truncated(msg: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Load the settings record from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use watch_winder::load_config;
///
/// let config = load_config("settings.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(ConfigError::IoError(truncated(&e.to_string()))))?;

    parse_config(&content)
}

/// Parse the settings record from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(truncated(e.message()))))?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

/// Render the settings record as TOML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_toml_string(config: &SystemConfig) -> Result<String> {
    toml::to_string(config)
        .map_err(|e| Error::Config(ConfigError::ParseError(truncated(&e.to_string()))))
}

/// Write the settings record to a TOML file.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_config<P: AsRef<Path>>(path: P, config: &SystemConfig) -> Result<()> {
    let content = to_toml_string(config)?;
    fs::write(path.as_ref(), content)
        .map_err(|e| Error::Config(ConfigError::IoError(truncated(&e.to_string()))))?;
    info!("settings saved to {}", path.as_ref().display());
    Ok(())
}

/// Load the settings record, falling back to defaults if storage is unavailable.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> SystemConfig {
    match load_config(path.as_ref()) {
        Ok(config) => {
            info!("settings loaded from {}", path.as_ref().display());
            config
        }
        Err(e) => {
            warn!("using default settings: {}", e);
            SystemConfig::default()
        }
    }
}
