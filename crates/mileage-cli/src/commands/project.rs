//! Project command for estimating the odometer reading on a date.

use std::fmt::Write;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use mileage_core::{Projection, Vehicle};

use super::rate::{describe_basis, format_calculation_json};
use super::util::{format_miles, parse_date_arg, vehicle_header};
use crate::Config;

/// Format a projection for human-readable output.
pub fn format_projection(vehicle: &Vehicle, projection: &Projection) -> String {
    let mut output = String::new();

    writeln!(output, "{}", vehicle_header(vehicle)).unwrap();
    writeln!(
        output,
        "Projected mileage on {}: {} miles",
        projection.date,
        format_miles(projection.mileage)
    )
    .unwrap();
    writeln!(
        output,
        "From {} miles on {} at {} miles/year",
        format_miles(f64::from(projection.anchor.mileage)),
        projection.anchor.date,
        format_miles(projection.rate.miles_per_year)
    )
    .unwrap();
    writeln!(output, "{}", describe_basis(&projection.rate.basis)).unwrap();

    output
}

/// Projects `vehicle` to `target` with the configured calculator chain.
pub fn project(vehicle: &Vehicle, config: &Config, target: NaiveDate) -> Result<Projection> {
    vehicle
        .calculate_timeline(&config.projection_calculator(target))
        .with_context(|| format!("cannot project mileage for {}", vehicle.vrm()))
}

/// Runs the project command.
pub fn run(vehicle: &Vehicle, config: &Config, at: &str, json: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let target = parse_date_arg(at, today)?;
    let projection = project(vehicle, config, target)?;

    if json {
        let output = format_calculation_json(vehicle, projection.into())?;
        println!("{output}");
    } else {
        let output = format_projection(vehicle, &projection);
        print!("{output}");
    }

    Ok(())
}
