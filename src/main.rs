mod cli;
mod logging;

use std::process;

use chrono::Utc;
use clap::Parser;
use thiserror::Error;

use airac::adapters::{render_cycle, render_cycles};
use airac::config::{AppConfig, ConfigError, OutputFormat};
use airac::{Cycle, ParseCycleError};

use crate::cli::{Cli, Command};

/// Failures surfaced to the user by the command line.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("[{}] {}", .0.code(), .0)]
    Parse(#[from] ParseCycleError),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    logging::init(cli.verbose, &config.log);

    let format = cli.format.unwrap_or(config.output.format);
    match run(&cli, format) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn load_config() -> Result<AppConfig, CliError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    Ok(config)
}

fn run(cli: &Cli, format: OutputFormat) -> Result<String, CliError> {
    match &cli.command {
        Some(Command::Id { identifier }) => {
            let cycle = Cycle::from_identifier(identifier)?;
            Ok(render_cycle(cycle, format)?)
        }
        Some(Command::Year { year }) => {
            let cycles: Vec<Cycle> = Cycle::in_year(*year).collect();
            tracing::debug!(year, count = cycles.len(), "listed cycles");
            Ok(render_cycles(&cycles, format)?)
        }
        None => {
            let date = cli.date.unwrap_or_else(|| Utc::now().date_naive());
            let cycle = Cycle::from_date(date);
            tracing::debug!(%date, cycle = %cycle, "resolved cycle for date");
            Ok(render_cycle(cycle, format)?)
        }
    }
}
