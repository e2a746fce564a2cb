//! CLI error handling with user-friendly messages.

use std::fmt;
use std::process;

use terraguess::config::ConfigError;
use terraguess::provider::ProviderError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(std::io::Error),
    /// Configuration error
    Config(ConfigError),
    /// No Google Maps API key available
    MissingApiKey,
    /// Failed to create a provider component
    Provider(ProviderError),
    /// Terminal I/O error
    Io(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if matches!(self, CliError::MissingApiKey | CliError::Provider(_)) {
            eprintln!();
            eprintln!("TerraGuess needs a Google Maps Platform API key with:");
            eprintln!("  1. Street View Static API enabled");
            eprintln!("  2. Geocoding API enabled");
            eprintln!();
            eprintln!("Provide it via --api-key, the GOOGLE_MAPS_API_KEY environment");
            eprintln!("variable, or google_api_key in terraguess.ini.");
        }

        process::exit(1);
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggingInit(e) => write!(f, "Failed to initialize logging: {}", e),
            Self::Config(e) => write!(f, "Configuration error: {}", e),
            Self::MissingApiKey => write!(f, "No Google Maps API key configured"),
            Self::Provider(e) => write!(f, "Provider error: {}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LoggingInit(e) | Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Provider(e) => Some(e),
            Self::MissingApiKey => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ProviderError> for CliError {
    fn from(e: ProviderError) -> Self {
        Self::Provider(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
