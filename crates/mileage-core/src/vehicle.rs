//! Vehicles and their event timelines.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calculator::{CalculationError, Calculator};
use crate::event::Event;
use crate::timeline::Timeline;
use crate::types::{ValidationError, VehicleId, Vrm, parse_date};

/// A vehicle with an associated event timeline.
///
/// The vehicle owns its timeline. Events can only be appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    id: VehicleId,
    vrm: Vrm,
    make: String,
    model: String,
    registration_date: NaiveDate,
    timeline: Timeline,
}

impl Vehicle {
    /// Creates a vehicle with an empty timeline.
    ///
    /// `registration_date` is the first registration date as `YYYY-MM-DD`.
    pub fn new(
        vrm: &str,
        make: impl Into<String>,
        model: impl Into<String>,
        registration_date: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self::registered_on(
            Vrm::new(vrm)?,
            make,
            model,
            parse_date(registration_date)?,
        ))
    }

    /// Creates a vehicle from already-validated identity fields.
    pub fn registered_on(
        vrm: Vrm,
        make: impl Into<String>,
        model: impl Into<String>,
        registration_date: NaiveDate,
    ) -> Self {
        Self {
            id: VehicleId::new(),
            vrm,
            make: make.into(),
            model: model.into(),
            registration_date,
            timeline: Timeline::new(),
        }
    }

    /// Adds an event to the vehicle timeline.
    ///
    /// Rejects events dated before the vehicle's registration date.
    pub fn add_event(&mut self, event: Event) -> Result<(), ValidationError> {
        if event.date() < self.registration_date {
            return Err(ValidationError::EventBeforeRegistration {
                event_date: event.date(),
                registration_date: self.registration_date,
            });
        }
        self.timeline.add(event);
        Ok(())
    }

    /// Runs `calculator` over this vehicle's timeline.
    pub fn calculate_timeline<C: Calculator>(
        &self,
        calculator: &C,
    ) -> Result<C::Output, CalculationError> {
        calculator.calculate(&self.timeline)
    }

    pub const fn id(&self) -> VehicleId {
        self.id
    }

    pub const fn vrm(&self) -> &Vrm {
        &self.vrm
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub const fn registration_date(&self) -> NaiveDate {
        self.registration_date
    }

    pub const fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}
