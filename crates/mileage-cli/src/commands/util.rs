//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::Context;
use chrono::{Days, Months, NaiveDate};
use mileage_core::{Vehicle, parse_date};
use regex::Regex;
use serde::Serialize;

/// Pre-compiled regex for relative date parsing.
static RELATIVE_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(in\s+)?(\d+)\s+(day|week|month|year)s?(\s+ago)?$").unwrap()
});

/// Conservative bound for relative dates (~1000 years in days).
const MAX_RELATIVE_DAYS: u64 = 1000 * 366;

/// Parse a date argument relative to `today`.
///
/// Supports:
/// - ISO 8601: "2026-01-15"
/// - "today"
/// - Relative: "3 months ago", "1 year ago", "in 2 years", "in 6 weeks"
pub fn parse_date_arg(s: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("today") {
        return Ok(today);
    }

    if let Ok(date) = parse_date(s) {
        return Ok(date);
    }

    let Some(caps) = RELATIVE_DATE_RE.captures(s) else {
        anyhow::bail!(
            "Invalid date: {s}. Use ISO 8601 (e.g., 2026-01-15), 'today', or relative (e.g., '2 years ago', 'in 6 months')"
        );
    };

    let future = caps.get(1).is_some();
    let past = caps.get(4).is_some();
    if future == past {
        anyhow::bail!("Invalid date: {s}. Relative dates need exactly one of 'in ...' or '... ago'");
    }

    let n: u64 = caps[2]
        .parse()
        .context("failed to parse number in relative date")?;

    let (max_for_unit, days_per_unit) = match &caps[3] {
        "day" => (MAX_RELATIVE_DAYS, 1),
        "week" => (MAX_RELATIVE_DAYS / 7, 7),
        "month" => (MAX_RELATIVE_DAYS / 31, 0),
        "year" => (MAX_RELATIVE_DAYS / 366, 0),
        unit => anyhow::bail!("Unknown date unit: {unit}"),
    };

    if n > max_for_unit {
        anyhow::bail!("Relative date value too large: {n} {}", &caps[3]);
    }

    // Months and years move by calendar months so "1 year ago" lands on the same day
    let shifted = if days_per_unit == 0 {
        let months_per_unit = if &caps[3] == "year" { 12 } else { 1 };
        let months = Months::new(u32::try_from(n * months_per_unit)?);
        if future {
            today.checked_add_months(months)
        } else {
            today.checked_sub_months(months)
        }
    } else {
        let days = Days::new(n * days_per_unit);
        if future {
            today.checked_add_days(days)
        } else {
            today.checked_sub_days(days)
        }
    };

    shifted.with_context(|| format!("relative date out of range: {s}"))
}

/// Formats a mileage figure rounded to whole miles with thousands separators.
pub fn format_miles(miles: f64) -> String {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "odometer figures are far inside i64 range"
    )]
    let rounded = miles.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(rounded.unsigned_abs()))
}

/// Formats a price in pence as pounds, e.g. `£5,000.00`.
pub fn format_pence(pence: u64) -> String {
    format!("£{}.{:02}", group_thousands(pence / 100), pence % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// One-line vehicle summary used at the top of text output.
pub fn vehicle_header(vehicle: &Vehicle) -> String {
    format!(
        "{}  {} {} (registered {})",
        vehicle.vrm(),
        vehicle.make(),
        vehicle.model(),
        vehicle.registration_date()
    )
}

/// Vehicle identity block for JSON output.
#[derive(Debug, Serialize)]
pub struct JsonVehicle<'a> {
    pub vrm: &'a str,
    pub make: &'a str,
    pub model: &'a str,
    pub registration_date: NaiveDate,
}

impl<'a> From<&'a Vehicle> for JsonVehicle<'a> {
    fn from(vehicle: &'a Vehicle) -> Self {
        Self {
            vrm: vehicle.vrm().as_str(),
            make: vehicle.make(),
            model: vehicle.model(),
            registration_date: vehicle.registration_date(),
        }
    }
}
