//! INI config file loading.
//!
//! Reads `terraguess.ini` sections into [`ConfigFile`], falling back to
//! defaults for anything missing. Unknown sections and keys are
//! ignored so old binaries tolerate newer config files.
//!
//! ```ini
//! [provider]
//! google_api_key = YOUR_KEY
//!
//! [sampler]
//! max_attempts = 10
//! search_radius_m = 50000
//!
//! [logging]
//! directory = logs
//! file = terraguess.log
//! ```

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;
use tracing::debug;

use super::settings::ConfigFile;

/// Environment variable overriding the configured API key.
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Errors that can occur loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read or parsed
    #[error("Failed to read config file: {0}")]
    Read(#[from] ini::Error),
    /// A key holds a value of the wrong type
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

impl ConfigFile {
    /// Loads configuration from an INI file, or returns defaults when
    /// the file does not exist.
    ///
    /// The `GOOGLE_MAPS_API_KEY` environment variable, when set,
    /// overrides any key found in the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is unreadable, or if a
    /// recognized key holds an unparseable value.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            debug!(path = %path.display(), "Loading config file");
            Self::from_ini(&Ini::load_from_file(path)?)?
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Self::default()
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                config.provider.google_api_key = Some(key);
            }
        }

        Ok(config)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("provider")) {
            if let Some(key) = section.get("google_api_key") {
                config.provider.google_api_key = Some(key.to_string());
            }
        }

        if let Some(section) = ini.section(Some("sampler")) {
            if let Some(value) = section.get("max_attempts") {
                config.sampler.max_attempts = parse_u32("sampler.max_attempts", value)?;
            }
            if let Some(value) = section.get("search_radius_m") {
                config.sampler.search_radius_m = parse_u32("sampler.search_radius_m", value)?;
            }
        }

        if let Some(section) = ini.section(Some("logging")) {
            if let Some(value) = section.get("directory") {
                config.logging.directory = PathBuf::from(value);
            }
            if let Some(value) = section.get("file") {
                config.logging.file = value.to_string();
            }
        }

        Ok(config)
    }
}

fn parse_u32(key: &str, value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
