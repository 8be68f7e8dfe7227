use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mileage_cli::commands::{project, rate, timeline};
use mileage_cli::input::load_vehicle;
use mileage_cli::{Cli, Commands, Config};

/// Load config and the vehicle file a command runs against.
fn load(config_path: Option<&Path>, file: &Path) -> Result<(mileage_core::Vehicle, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let vehicle = load_vehicle(file)?;
    Ok((vehicle, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match &cli.command {
        Some(Commands::Rate { file, json }) => {
            let (vehicle, config) = load(cli.config.as_deref(), file)?;
            rate::run(&vehicle, &config, *json)?;
        }
        Some(Commands::Project { file, at, json }) => {
            let (vehicle, config) = load(cli.config.as_deref(), file)?;
            project::run(&vehicle, &config, at, *json)?;
        }
        Some(Commands::Timeline {
            file,
            mileage_only,
            json,
        }) => {
            let (vehicle, _config) = load(cli.config.as_deref(), file)?;
            timeline::run(&vehicle, *mileage_only, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
