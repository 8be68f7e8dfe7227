//! Mileage calculators.
//!
//! A [`Calculator`] reduces a [`Timeline`] to a single figure. Strategies
//! produce an [`AnnualMileage`]; decorators wrap another calculator:
//!
//! - [`MeanMileage`] - mean annual mileage between the first and last readings
//! - [`DefaultMileage`] - substitutes a default rate when no rate can be measured
//! - [`ProjectedMileage`] - extrapolates a rate from the latest reading to a date
//!
//! ```
//! use mileage_core::{DefaultMileage, Event, MeanMileage, MotResult, ProjectedMileage, Vehicle};
//!
//! let mut vehicle = Vehicle::new("AB51 DVL", "Ford", "Focus", "2017-06-01").unwrap();
//! vehicle.add_event(Event::mot_test("2018-01-01", 10_000, MotResult::Pass).unwrap()).unwrap();
//! vehicle.add_event(Event::mot_test("2020-01-01", 30_000, MotResult::Pass).unwrap()).unwrap();
//!
//! let target = "2021-01-01".parse().unwrap();
//! let calculator = ProjectedMileage::new(DefaultMileage::new(MeanMileage::default()), target);
//! let projection = vehicle.calculate_timeline(&calculator).unwrap();
//! assert!((projection.mileage - 40_000.0).abs() < 1e-9);
//! ```

mod default;
mod mean;
mod projected;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::MileageReading;
use crate::timeline::Timeline;

pub use default::DefaultMileage;
pub use mean::MeanMileage;
pub use projected::ProjectedMileage;

/// Annual mileage used when a timeline cannot support a measured rate.
pub const DEFAULT_ANNUAL_MILEAGE: f64 = 7_900.0;

/// Errors raised while calculating over a timeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// The first and last readings share a date, so no time has elapsed.
    #[error("first and last mileage readings are both dated {date}; cannot derive an annual rate")]
    DegenerateInterval { date: NaiveDate },

    /// Projection needs at least one mileage reading to start from.
    #[error("no mileage reading to project from")]
    NoAnchor,
}

/// A single calculation over a timeline.
pub trait Calculator {
    /// What the calculation produces.
    type Output;

    fn calculate(&self, timeline: &Timeline) -> Result<Self::Output, CalculationError>;
}

impl<C: Calculator + ?Sized> Calculator for &C {
    type Output = C::Output;

    fn calculate(&self, timeline: &Timeline) -> Result<Self::Output, CalculationError> {
        (**self).calculate(timeline)
    }
}

impl<C: Calculator + ?Sized> Calculator for Box<C> {
    type Output = C::Output;

    fn calculate(&self, timeline: &Timeline) -> Result<Self::Output, CalculationError> {
        (**self).calculate(timeline)
    }
}

/// Where an annual rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum RateBasis {
    /// Measured between two readings.
    Measured {
        from: MileageReading,
        to: MileageReading,
    },
    /// Too few readings to measure; a default rate was used.
    Default { readings: usize },
}

/// An annual mileage rate in miles per year.
///
/// Negative when the odometer went backwards between the measured readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualMileage {
    pub miles_per_year: f64,
    pub basis: RateBasis,
}

impl AnnualMileage {
    pub const fn defaulted(miles_per_year: f64, readings: usize) -> Self {
        Self {
            miles_per_year,
            basis: RateBasis::Default { readings },
        }
    }

    /// Whether the rate is a fallback rather than a measurement.
    pub const fn is_default(&self) -> bool {
        matches!(self.basis, RateBasis::Default { .. })
    }
}

/// An estimated odometer reading on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// The date the estimate is for.
    pub date: NaiveDate,
    /// Estimated odometer reading in miles.
    pub mileage: f64,
    /// The reading the estimate was extrapolated from.
    pub anchor: MileageReading,
    /// The rate used for extrapolation.
    pub rate: AnnualMileage,
}

/// Any calculator result, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Calculation {
    Rate(AnnualMileage),
    ProjectedMileage(Projection),
}

impl Calculation {
    /// The headline figure: miles per year for a rate, miles for a projection.
    pub const fn value(&self) -> f64 {
        match self {
            Self::Rate(rate) => rate.miles_per_year,
            Self::ProjectedMileage(projection) => projection.mileage,
        }
    }

    /// The date a projected mileage applies to.
    pub const fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Rate(_) => None,
            Self::ProjectedMileage(projection) => Some(projection.date),
        }
    }
}

impl From<AnnualMileage> for Calculation {
    fn from(rate: AnnualMileage) -> Self {
        Self::Rate(rate)
    }
}

impl From<Projection> for Calculation {
    fn from(projection: Projection) -> Self {
        Self::ProjectedMileage(projection)
    }
}
