//! Rate command for showing a vehicle's mean annual mileage.

use std::fmt::Write;

use anyhow::Result;
use mileage_core::{AnnualMileage, Calculation, RateBasis, Vehicle};
use serde::Serialize;

use super::util::{JsonVehicle, format_miles, vehicle_header};
use crate::Config;

/// JSON output structure shared by rate and projection output.
#[derive(Debug, Serialize)]
pub struct JsonCalculation<'a> {
    pub vehicle: JsonVehicle<'a>,
    #[serde(flatten)]
    pub calculation: Calculation,
}

/// Explains where a rate came from.
pub fn describe_basis(basis: &RateBasis) -> String {
    match basis {
        RateBasis::Measured { from, to } => format!(
            "Measured between {} miles on {} and {} miles on {}",
            format_miles(f64::from(from.mileage)),
            from.date,
            format_miles(f64::from(to.mileage)),
            to.date
        ),
        RateBasis::Default { readings: 1 } => {
            "Default rate: 1 mileage reading, at least 2 needed to measure".to_string()
        }
        RateBasis::Default { readings } => {
            format!("Default rate: {readings} mileage readings, at least 2 needed to measure")
        }
    }
}

/// Format a rate for human-readable output.
pub fn format_rate(vehicle: &Vehicle, rate: &AnnualMileage) -> String {
    let mut output = String::new();

    writeln!(output, "{}", vehicle_header(vehicle)).unwrap();
    writeln!(
        output,
        "Annual mileage: {} miles/year",
        format_miles(rate.miles_per_year)
    )
    .unwrap();
    writeln!(output, "{}", describe_basis(&rate.basis)).unwrap();

    if rate.miles_per_year < 0.0 {
        writeln!(
            output,
            "Warning: the odometer reading decreased; check for clocking or a data error"
        )
        .unwrap();
    }

    output
}

/// Format any calculation as JSON.
pub fn format_calculation_json(vehicle: &Vehicle, calculation: Calculation) -> Result<String> {
    let json = JsonCalculation {
        vehicle: JsonVehicle::from(vehicle),
        calculation,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Runs the rate command.
pub fn run(vehicle: &Vehicle, config: &Config, json: bool) -> Result<()> {
    let rate = vehicle.calculate_timeline(&config.rate_calculator())?;

    if json {
        let output = format_calculation_json(vehicle, rate.into())?;
        println!("{output}");
    } else {
        let output = format_rate(vehicle, &rate);
        print!("{output}");
    }

    Ok(())
}
