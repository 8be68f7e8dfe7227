//! Vehicle description files.
//!
//! A vehicle file is a JSON object with the vehicle's identity and its
//! history:
//!
//! ```json
//! {
//!   "vrm": "AB51 DVL",
//!   "make": "Ford",
//!   "model": "Focus",
//!   "registration_date": "2017-06-01",
//!   "events": [
//!     {"date": "2018-01-01", "type": "mot_test", "mileage": 10000, "result": "pass"},
//!     {"date": "2019-06-01", "type": "advertised_for_sale", "price_pence": 500000, "mileage": 20000},
//!     {"date": "2020-01-01", "type": "vrm_change", "from_vrm": "AB51 DVL", "to_vrm": "XYZ 789"}
//!   ]
//! }
//! ```

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use mileage_core::{Event, Vehicle};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct VehicleFile {
    vrm: String,
    make: String,
    model: String,
    registration_date: String,
    #[serde(default)]
    events: Vec<Event>,
}

/// Loads a vehicle from `path`, or from stdin when `path` is `-`.
pub fn load_vehicle(path: &Path) -> Result<Vehicle> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read vehicle from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    parse_vehicle(&content).with_context(|| format!("invalid vehicle file {}", path.display()))
}

/// Parses a vehicle description and replays its events onto the timeline.
pub fn parse_vehicle(json: &str) -> Result<Vehicle> {
    let file: VehicleFile = serde_json::from_str(json)?;

    let mut vehicle = Vehicle::new(
        &file.vrm,
        file.make,
        file.model,
        &file.registration_date,
    )
    .context("invalid vehicle identity")?;

    for (index, event) in file.events.into_iter().enumerate() {
        vehicle
            .add_event(event)
            .with_context(|| format!("event {index} rejected"))?;
    }

    tracing::debug!(
        vrm = %vehicle.vrm(),
        events = vehicle.timeline().len(),
        "loaded vehicle"
    );
    Ok(vehicle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VEHICLE: &str = r#"{
        "vrm": "AB51 DVL",
        "make": "Ford",
        "model": "Focus",
        "registration_date": "2017-06-01",
        "events": [
            {"date": "2020-01-01", "type": "mot_test", "mileage": 30000, "result": "pass"},
            {"date": "2018-01-01", "type": "mot_test", "mileage": 10000, "result": "fail"},
            {"date": "2019-06-01", "type": "vrm_change", "from_vrm": "AB51 DVL", "to_vrm": "XYZ 789"}
        ]
    }"#;

    #[test]
    fn parses_vehicle_with_events() {
        let vehicle = parse_vehicle(VEHICLE).unwrap();

        assert_eq!(vehicle.vrm().as_str(), "AB51 DVL");
        assert_eq!(vehicle.timeline().len(), 3);
        let readings = vehicle.timeline().mileage_readings();
        assert_eq!(readings.first().unwrap().mileage, 10_000);
        assert_eq!(readings.last().unwrap().mileage, 30_000);
    }

    #[test]
    fn events_default_to_empty() {
        let json = r#"{"vrm": "AB51 DVL", "make": "Ford", "model": "Focus", "registration_date": "2017-06-01"}"#;
        let vehicle = parse_vehicle(json).unwrap();
        assert!(vehicle.timeline().is_empty());
    }

    #[test]
    fn rejects_invalid_event_date() {
        let json = r#"{
            "vrm": "AB51 DVL", "make": "Ford", "model": "Focus", "registration_date": "2017-06-01",
            "events": [{"date": "2019-02-29", "type": "mot_test", "mileage": 1, "result": "pass"}]
        }"#;
        let err = parse_vehicle(json).unwrap_err();
        assert!(format!("{err:#}").contains("invalid date"), "{err:#}");
    }

    #[test]
    fn rejects_invalid_registration_date() {
        let json = r#"{"vrm": "AB51 DVL", "make": "Ford", "model": "Focus", "registration_date": "June 2017"}"#;
        let err = parse_vehicle(json).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("invalid vehicle identity"), "{message}");
        assert!(message.contains("invalid date"), "{message}");
    }

    #[test]
    fn rejects_event_before_registration() {
        let json = r#"{
            "vrm": "AB51 DVL", "make": "Ford", "model": "Focus", "registration_date": "2017-06-01",
            "events": [{"date": "2016-01-01", "type": "mot_test", "mileage": 1, "result": "pass"}]
        }"#;
        let err = parse_vehicle(json).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("event 0 rejected"), "{message}");
        assert!(message.contains("earlier than the vehicle's registration date"), "{message}");
    }

    #[test]
    fn load_vehicle_reports_missing_file() {
        let err = load_vehicle(Path::new("/nonexistent/vehicle.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"), "{err}");
    }
}
