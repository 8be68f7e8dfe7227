//! Mean annual mileage.

use tracing::{debug, warn};

use super::{AnnualMileage, CalculationError, Calculator, DEFAULT_ANNUAL_MILEAGE, RateBasis};
use crate::timeline::Timeline;
use crate::years::YearBasis;

/// Mean annual mileage between the earliest and latest odometer readings.
///
/// Readings in between do not change the result: distance over the whole
/// span is already the mean across every interval inside it. With fewer than
/// two readings there is no interval to measure, and the configured default
/// rate is returned, flagged as [`RateBasis::Default`].
///
/// A decreasing odometer (clocking, or a data entry error) yields a negative
/// rate. It is passed through unclamped; callers decide what to do with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanMileage {
    default_annual_mileage: f64,
    year_basis: YearBasis,
}

impl MeanMileage {
    pub const fn new(default_annual_mileage: f64) -> Self {
        Self {
            default_annual_mileage,
            year_basis: YearBasis::Calendar,
        }
    }

    #[must_use]
    pub const fn with_year_basis(mut self, year_basis: YearBasis) -> Self {
        self.year_basis = year_basis;
        self
    }

    pub const fn default_annual_mileage(&self) -> f64 {
        self.default_annual_mileage
    }
}

impl Default for MeanMileage {
    fn default() -> Self {
        Self::new(DEFAULT_ANNUAL_MILEAGE)
    }
}

impl Calculator for MeanMileage {
    type Output = AnnualMileage;

    fn calculate(&self, timeline: &Timeline) -> Result<AnnualMileage, CalculationError> {
        let readings = timeline.mileage_readings();
        let [first, .., last] = readings.as_slice() else {
            debug!(
                readings = readings.len(),
                fallback = self.default_annual_mileage,
                "too few mileage readings to measure a rate"
            );
            return Ok(AnnualMileage::defaulted(
                self.default_annual_mileage,
                readings.len(),
            ));
        };

        if first.date == last.date {
            return Err(CalculationError::DegenerateInterval { date: first.date });
        }

        let years = self.year_basis.years_between(first.date, last.date);
        let delta = i64::from(last.mileage) - i64::from(first.mileage);
        if delta < 0 {
            warn!(
                from = %first.date,
                to = %last.date,
                delta,
                "odometer reading decreased; annual mileage will be negative"
            );
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "difference of two u32 readings is exact in f64"
        )]
        let miles_per_year = delta as f64 / years;

        debug!(
            from = %first.date,
            to = %last.date,
            delta,
            years,
            miles_per_year,
            "measured mean annual mileage"
        );

        Ok(AnnualMileage {
            miles_per_year,
            basis: RateBasis::Measured {
                from: *first,
                to: *last,
            },
        })
    }
}
