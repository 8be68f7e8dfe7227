//! Fractional year arithmetic between calendar dates.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of the mean Gregorian year in days.
pub const DAYS_IN_MEAN_YEAR: f64 = 365.2425;

/// How the span between two dates is converted into years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearBasis {
    /// Whole calendar years, plus the remaining days as a fraction of the
    /// following anniversary year. Dates exactly one year apart are `1.0`.
    #[default]
    Calendar,
    /// Elapsed days divided by [`DAYS_IN_MEAN_YEAR`].
    MeanGregorian,
}

impl YearBasis {
    /// Signed number of years from `from` to `to`; negative when `to` is earlier.
    pub fn years_between(self, from: NaiveDate, to: NaiveDate) -> f64 {
        match self {
            Self::Calendar => calendar_years(from, to),
            Self::MeanGregorian => days_as_f64(from, to) / DAYS_IN_MEAN_YEAR,
        }
    }
}

fn calendar_years(from: NaiveDate, to: NaiveDate) -> f64 {
    if to < from {
        return -calendar_years(to, from);
    }

    let mut whole = to.year() - from.year();
    let mut anniversary = add_years(from, whole);
    if anniversary > to {
        whole -= 1;
        anniversary = add_years(from, whole);
    }
    let next = add_years(from, whole + 1);

    f64::from(whole) + days_as_f64(anniversary, to) / days_as_f64(anniversary, next)
}

/// Adds whole years; a Feb 29 start lands on Feb 28 in common years.
fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    date.checked_add_months(Months::new(years.unsigned_abs() * 12))
        .unwrap_or(NaiveDate::MAX)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "day counts between calendar dates are far below 2^52"
)]
fn days_as_f64(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64
}
