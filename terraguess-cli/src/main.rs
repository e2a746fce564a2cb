//! TerraGuess CLI - play the geography guessing game in a terminal.

mod error;
mod game;

use std::path::PathBuf;

use clap::Parser;

use terraguess::config::ConfigFile;
use terraguess::logging::init_logging;

use error::CliError;

#[derive(Parser)]
#[command(name = "terraguess")]
#[command(version = terraguess::VERSION)]
#[command(about = "Guess the country from a random street-level panorama", long_about = None)]
struct Args {
    /// Path to the INI config file
    #[arg(long, default_value = "terraguess.ini")]
    config: PathBuf,

    /// Google Maps Platform API key (overrides config and environment)
    #[arg(long)]
    api_key: Option<String>,

    /// Maximum imagery lookups before a round fails
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Panorama search radius in meters
    #[arg(long)]
    radius_m: Option<u32>,

    /// Directory for log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        e.exit();
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let mut config = ConfigFile::load_or_default(&args.config)?;
    apply_overrides(&mut config, args);

    let _logging_guard = init_logging(&config.logging.directory, &config.logging.file)
        .map_err(CliError::LoggingInit)?;

    game::run(config).await
}

/// Layers command-line flags over the loaded configuration.
fn apply_overrides(config: &mut ConfigFile, args: Args) {
    if args.api_key.is_some() {
        config.provider.google_api_key = args.api_key;
    }
    if let Some(max_attempts) = args.max_attempts {
        config.sampler.max_attempts = max_attempts;
    }
    if let Some(radius_m) = args.radius_m {
        config.sampler.search_radius_m = radius_m;
    }
    if let Some(log_dir) = args.log_dir {
        config.logging.directory = log_dir;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_flag_overrides_config() {
        let args = Args::try_parse_from(["terraguess", "--log-dir", "/tmp/tg-logs"])
            .expect("--log-dir should parse");

        let mut config = ConfigFile::default();
        apply_overrides(&mut config, args);
        assert_eq!(config.logging.directory, PathBuf::from("/tmp/tg-logs"));
    }

    #[test]
    fn test_all_flags_override_config() {
        let args = Args::try_parse_from([
            "terraguess",
            "--api-key",
            "abc123",
            "--max-attempts",
            "50",
            "--radius-m",
            "500000",
            "--log-dir",
            "/var/log/tg",
        ])
        .expect("All flags should parse");

        let mut config = ConfigFile::default();
        apply_overrides(&mut config, args);
        assert_eq!(config.provider.google_api_key.as_deref(), Some("abc123"));
        assert_eq!(config.sampler.max_attempts, 50);
        assert_eq!(config.sampler.search_radius_m, 500_000);
        assert_eq!(config.logging.directory, PathBuf::from("/var/log/tg"));
    }

    #[test]
    fn test_flags_absent_leave_config_untouched() {
        let args = Args::try_parse_from(["terraguess"]).expect("No flags should parse");

        let mut config = ConfigFile::default();
        let before = config.logging.directory.clone();
        apply_overrides(&mut config, args);
        assert_eq!(config.logging.directory, before);
    }
}
