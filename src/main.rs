use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::{debug, error, info, warn, Level};

use trainstat::config::AppConfig;
use trainstat::error::TrainStatError;
use trainstat::export::{self, OutputFormat};
use trainstat::import::{self, ImportManager};
use trainstat::logging::{self, LogFormat, LogLevel};
use trainstat::models::InfoMessage;

/// TrainStat - Workout Statistics CLI
///
/// Turns raw sensor packages (steps or strokes, duration, weight and
/// workout-specific extras) into distance, average speed and calorie
/// summaries for running, walking and swimming sessions.
#[derive(Parser)]
#[command(name = "trainstat")]
#[command(version)]
#[command(about = "Workout statistics from sensor packages", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Read packages from a CSV or JSON file instead of the configured list
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log format (pretty, json, compact)
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<LogFormat>,
}

fn main() {
    if let Err(err) = run() {
        let message = match err.downcast_ref::<TrainStatError>() {
            Some(app_err) => {
                log_failure(app_err);
                app_err.user_message()
            }
            None => format!("{:#}", err),
        };
        eprintln!("{} {}", "error:".red().bold(), message);
        std::process::exit(1);
    }
}

/// Record a failure in the log at the level matching its severity
fn log_failure(err: &TrainStatError) {
    let severity = err.severity();
    if severity.to_tracing_level() == Level::WARN {
        warn!(error = %err, ?severity, "Packages rejected");
    } else {
        error!(error = %err, ?severity, "Run failed");
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default()?,
    };

    // Command line flags override the config file
    if cli.verbose > 0 {
        config.logging.level = LogLevel::from_verbosity(cli.verbose);
    }
    if let Some(log_format) = cli.log_format {
        config.logging.format = log_format;
    }
    if let Some(format) = cli.format {
        config.output = format;
    }

    logging::init_logging(&config.logging)?;
    debug!(config = ?cli.config, "Configuration loaded");

    let packages = match &cli.input {
        Some(path) => ImportManager::new()
            .import_file(path)
            .with_context(|| format!("Failed to import packages from {}", path.display()))?,
        None => config.packages.clone(),
    };

    let messages: Vec<InfoMessage> = import::read_packages(&packages)?
        .iter()
        .map(|workout| workout.show_training_info())
        .collect();
    info!(count = messages.len(), "Workouts summarized");

    print!("{}", export::render(&messages, config.output)?);
    Ok(())
}
