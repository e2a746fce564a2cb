//! Default values and constants for all configuration settings.

use std::path::PathBuf;

use super::settings::{LoggingSettings, SamplerSettings};

/// Default retry ceiling for the round sampler. Ten full-sphere draws
/// find street-level coverage in the large majority of rounds with the
/// default radius.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Default panorama search radius in meters (50 km).
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 50_000;

/// Default log directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default log filename.
pub const DEFAULT_LOG_FILE: &str = "terraguess.log";

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            search_radius_m: DEFAULT_SEARCH_RADIUS_M,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIR),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
