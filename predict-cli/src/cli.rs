use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use predict_core::{Config, provider};
use std::{
    io::{self, IsTerminal, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::debug;

use crate::{driver, logging};

const PROMPT: &str = "Enter city name for weather prediction: ";

/// Top-level CLI struct. The city name itself is read from standard input.
#[derive(Debug, Parser)]
#[command(
    name = "weather-predict",
    version,
    about = "Predict the weather for a city name read from standard input"
)]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds for this run; 0 disables it.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Log lookup details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Edit the service endpoints and request timeout interactively.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        logging::init(self.verbose);

        let (path, mut config) = load_config(self.config)?;
        debug!("Loaded configuration from {}: {config:?}", path.display());

        match self.command {
            Some(Command::Configure) => {
                configure(&path, config)?;
                Ok(ExitCode::SUCCESS)
            }
            None => {
                if let Some(secs) = self.timeout {
                    config.set_timeout_secs(secs);
                }
                predict_from_stdin(&config).await
            }
        }
    }
}

/// The explicit `--config` file, or the platform default.
fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<(PathBuf, Config)> {
    match explicit {
        Some(path) => {
            let config = Config::load_from(&path)?;
            Ok((path, config))
        }
        None => Ok((Config::config_file_path()?, Config::load()?)),
    }
}

async fn predict_from_stdin(config: &Config) -> anyhow::Result<ExitCode> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("{PROMPT}");
        io::stderr().flush()?;
    }

    let city = driver::read_city(&mut stdin.lock())
        .context("Failed to read city name from standard input")?
        .context("No city name provided on standard input")?;

    let (geocoder, forecast) = provider::open_meteo_from_config(config)?;

    let mut stdout = io::stdout().lock();
    let outcome = driver::run(&geocoder, &forecast, &city, &mut stdout).await?;
    stdout.flush()?;

    Ok(outcome.exit_code())
}

fn configure(path: &Path, mut config: Config) -> anyhow::Result<()> {
    config.geocoding_url = Text::new("Geocoding endpoint:")
        .with_default(&config.geocoding_url)
        .prompt()?;

    config.forecast_url = Text::new("Forecast endpoint:")
        .with_default(&config.forecast_url)
        .prompt()?;

    let timeout = CustomType::<u64>::new("Request timeout in seconds (0 = wait indefinitely):")
        .with_default(config.timeout_secs.unwrap_or(0))
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;
    config.set_timeout_secs(timeout);

    config.save_to(path)?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn explicit_config_file_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("predict.toml");
        fs::write(&path, "forecast_url = \"http://localhost:1/forecast\"\n").expect("write");

        let (loaded_path, config) = load_config(Some(path.clone())).expect("load");

        assert_eq!(loaded_path, path);
        assert_eq!(config.forecast_url, "http://localhost:1/forecast");
    }

    #[test]
    fn falls_back_to_platform_config() {
        let (path, config) = load_config(None).expect("load");

        assert_eq!(path, Config::config_file_path().expect("platform path"));
        assert_eq!(config, Config::load().expect("platform config"));
    }

    #[test]
    fn city_comes_from_stdin_not_arguments() {
        let cli = Cli::try_parse_from(["weather-predict", "--timeout", "3", "-v"]).expect("parse");
        assert_eq!(cli.timeout, Some(3));
        assert!(cli.verbose);
        assert!(cli.command.is_none());

        assert!(Cli::try_parse_from(["weather-predict", "Paris"]).is_err());
    }
}
