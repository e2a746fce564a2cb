//! Configuration for the round engine and CLI.
//!
//! Settings are plain structs with defaults in [`defaults`]; the
//! optional `terraguess.ini` file and the `GOOGLE_MAPS_API_KEY`
//! environment variable layer on top of them.

mod defaults;
mod file;
mod settings;

pub use defaults::{
    DEFAULT_LOG_DIR, DEFAULT_LOG_FILE, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEARCH_RADIUS_M,
};
pub use file::{ConfigError, API_KEY_ENV};
pub use settings::{ConfigFile, LoggingSettings, ProviderSettings, SamplerSettings};
