//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    /// Provider credentials
    pub provider: ProviderSettings,
    /// Round sampling settings
    pub sampler: SamplerSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Provider configuration.
#[derive(Debug, Clone, Default)]
pub struct ProviderSettings {
    /// Google Maps Platform API key (Street View Static API and
    /// Geocoding API must be enabled)
    pub google_api_key: Option<String>,
}

/// Round sampling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerSettings {
    /// Maximum provider queries before a round fails with imagery
    /// exhaustion
    pub max_attempts: u32,
    /// Panorama search radius in meters. A wider radius raises the hit
    /// rate but snaps panoramas further from the drawn point.
    pub search_radius_m: u32,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Directory for log files
    pub directory: PathBuf,
    /// Log filename
    pub file: String,
}
