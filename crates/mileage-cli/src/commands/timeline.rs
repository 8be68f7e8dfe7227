//! Timeline command for listing a vehicle's events.

use std::fmt::Write;

use anyhow::Result;
use mileage_core::{Event, EventKind, Vehicle};
use serde::Serialize;

use super::util::{JsonVehicle, format_miles, format_pence, vehicle_header};

/// JSON output structure.
#[derive(Debug, Serialize)]
pub struct JsonTimeline<'a> {
    pub vehicle: JsonVehicle<'a>,
    pub events: Vec<&'a Event>,
}

/// Selects the events to show, oldest first.
pub fn select_events(vehicle: &Vehicle, mileage_only: bool) -> Vec<&Event> {
    if mileage_only {
        vehicle.timeline().events_where(Event::has_mileage)
    } else {
        vehicle.timeline().events()
    }
}

fn describe(kind: &EventKind) -> (String, String) {
    match kind {
        EventKind::AdvertisedForSale {
            price_pence,
            mileage,
        } => (
            "Advertised for sale".to_string(),
            format!(
                "{} miles  {}",
                format_miles(f64::from(*mileage)),
                format_pence(*price_pence)
            ),
        ),
        EventKind::MotTest { mileage, result } => (
            format!("MOT test ({result})"),
            format!("{} miles", format_miles(f64::from(*mileage))),
        ),
        EventKind::VrmChange { from_vrm, to_vrm } => {
            ("VRM change".to_string(), format!("{from_vrm} -> {to_vrm}"))
        }
    }
}

/// Format events for human-readable output.
pub fn format_timeline(vehicle: &Vehicle, events: &[&Event]) -> String {
    let mut output = String::new();

    writeln!(output, "{}", vehicle_header(vehicle)).unwrap();
    writeln!(output).unwrap();

    if events.is_empty() {
        writeln!(output, "No events recorded.").unwrap();
        return output;
    }

    for event in events {
        let (what, detail) = describe(event.kind());
        writeln!(output, "{}  {:<20}  {}", event.date(), what, detail).unwrap();
    }

    output
}

/// Format events as JSON.
pub fn format_timeline_json(vehicle: &Vehicle, events: Vec<&Event>) -> Result<String> {
    let json = JsonTimeline {
        vehicle: JsonVehicle::from(vehicle),
        events,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Runs the timeline command.
pub fn run(vehicle: &Vehicle, mileage_only: bool, json: bool) -> Result<()> {
    let events = select_events(vehicle, mileage_only);

    if json {
        let output = format_timeline_json(vehicle, events)?;
        println!("{output}");
    } else {
        let output = format_timeline(vehicle, &events);
        print!("{output}");
    }

    Ok(())
}
