//! Core domain logic for vehicle mileage estimation.
//!
//! This crate contains the fundamental types and logic for:
//! - Events: dated history records, some carrying an odometer reading
//! - Timelines: a vehicle's events in chronological order
//! - Calculators: mean annual mileage, default rates, and projections
//! - Vehicles: identity data plus the timeline calculators run over

pub mod calculator;
pub mod event;
pub mod timeline;
pub mod types;
pub mod vehicle;
pub mod years;

pub use calculator::{
    AnnualMileage, Calculation, CalculationError, Calculator, DEFAULT_ANNUAL_MILEAGE,
    DefaultMileage, MeanMileage, ProjectedMileage, Projection, RateBasis,
};
pub use event::{Event, EventKind, MileageReading};
pub use timeline::Timeline;
pub use types::{MotResult, ValidationError, VehicleId, Vrm, parse_date};
pub use vehicle::Vehicle;
pub use years::{DAYS_IN_MEAN_YEAR, YearBasis};
