//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vehicle mileage estimator.
///
/// Derives an average annual mileage from a vehicle's history of adverts,
/// MOT tests and plate changes, and projects its odometer reading to a date.
#[derive(Debug, Parser)]
#[command(name = "mileage", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the mean annual mileage.
    Rate {
        /// Vehicle JSON file, or `-` for stdin.
        file: PathBuf,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Project the odometer reading to a date.
    Project {
        /// Vehicle JSON file, or `-` for stdin.
        file: PathBuf,

        /// Target date: YYYY-MM-DD, "today", "2 years ago", "in 6 months".
        #[arg(long, default_value = "today")]
        at: String,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the vehicle's events in date order.
    Timeline {
        /// Vehicle JSON file, or `-` for stdin.
        file: PathBuf,

        /// Only show events with a mileage reading.
        #[arg(long)]
        mileage_only: bool,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
