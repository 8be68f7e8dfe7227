//! Vehicle mileage estimator CLI library.
//!
//! This crate provides the CLI interface for the mileage estimator.

mod cli;
pub mod commands;
mod config;
pub mod input;

pub use cli::{Cli, Commands};
pub use config::Config;
