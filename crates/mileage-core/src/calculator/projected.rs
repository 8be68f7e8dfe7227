//! Projection decorator.

use chrono::NaiveDate;
use tracing::debug;

use super::{AnnualMileage, CalculationError, Calculator, Projection};
use crate::timeline::Timeline;
use crate::years::YearBasis;

/// Projects the odometer reading on a target date.
///
/// Extrapolates the wrapped calculator's annual rate from the most recent
/// mileage reading (the anchor). Targets before the anchor are allowed and
/// project backwards. A timeline with no readings has no anchor and fails
/// with [`CalculationError::NoAnchor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedMileage<C> {
    inner: C,
    target: NaiveDate,
    year_basis: YearBasis,
}

impl<C> ProjectedMileage<C> {
    pub const fn new(inner: C, target: NaiveDate) -> Self {
        Self {
            inner,
            target,
            year_basis: YearBasis::Calendar,
        }
    }

    #[must_use]
    pub const fn with_year_basis(mut self, year_basis: YearBasis) -> Self {
        self.year_basis = year_basis;
        self
    }

    pub const fn target(&self) -> NaiveDate {
        self.target
    }
}

impl<C> Calculator for ProjectedMileage<C>
where
    C: Calculator<Output = AnnualMileage>,
{
    type Output = Projection;

    fn calculate(&self, timeline: &Timeline) -> Result<Projection, CalculationError> {
        let rate = self.inner.calculate(timeline)?;
        let anchor = timeline
            .latest_reading()
            .ok_or(CalculationError::NoAnchor)?;

        let years = self.year_basis.years_between(anchor.date, self.target);
        let mileage = f64::from(anchor.mileage) + rate.miles_per_year * years;

        debug!(
            anchor = %anchor.date,
            target = %self.target,
            years,
            mileage,
            "projected mileage"
        );

        Ok(Projection {
            date: self.target,
            mileage,
            anchor,
            rate,
        })
    }
}
