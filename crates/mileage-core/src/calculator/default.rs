//! Default-rate decorator.

use tracing::debug;

use super::{AnnualMileage, CalculationError, Calculator, DEFAULT_ANNUAL_MILEAGE};
use crate::timeline::Timeline;

/// Supplies the default annual mileage for any rate strategy.
///
/// When the wrapped calculator reports that it could not measure a rate
/// ([`RateBasis::Default`](super::RateBasis::Default)), its internal fallback
/// is replaced with this decorator's value. Measured rates pass through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultMileage<C> {
    inner: C,
    default_annual_mileage: f64,
}

impl<C> DefaultMileage<C> {
    /// Wraps `inner` with the standard default of 7,900 miles per year.
    pub const fn new(inner: C) -> Self {
        Self::with_default(inner, DEFAULT_ANNUAL_MILEAGE)
    }

    pub const fn with_default(inner: C, default_annual_mileage: f64) -> Self {
        Self {
            inner,
            default_annual_mileage,
        }
    }

    pub const fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C> Calculator for DefaultMileage<C>
where
    C: Calculator<Output = AnnualMileage>,
{
    type Output = AnnualMileage;

    fn calculate(&self, timeline: &Timeline) -> Result<AnnualMileage, CalculationError> {
        let rate = self.inner.calculate(timeline)?;
        if !rate.is_default() {
            return Ok(rate);
        }

        debug!(
            replaced = rate.miles_per_year,
            substitute = self.default_annual_mileage,
            "substituting default annual mileage"
        );
        Ok(AnnualMileage {
            miles_per_year: self.default_annual_mileage,
            ..rate
        })
    }
}
