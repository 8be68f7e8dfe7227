//! Vehicle history events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{MotResult, ValidationError, Vrm, parse_date};

/// A dated occurrence in a vehicle's history.
///
/// Events are immutable once constructed. Only some kinds carry an odometer
/// reading; see [`Event::mileage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    date: NaiveDate,
    #[serde(flatten)]
    kind: EventKind,
}

/// The kind of occurrence, with its kind-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// The vehicle was advertised for sale.
    AdvertisedForSale {
        /// Asking price in pence. The currency is implicit.
        price_pence: u64,
        mileage: u32,
    },
    /// The vehicle went through an MOT test.
    MotTest { mileage: u32, result: MotResult },
    /// The vehicle's registration mark changed.
    VrmChange { from_vrm: Vrm, to_vrm: Vrm },
}

impl EventKind {
    /// The odometer reading recorded with this kind of event, if any.
    pub const fn mileage(&self) -> Option<u32> {
        match self {
            Self::AdvertisedForSale { mileage, .. } | Self::MotTest { mileage, .. } => {
                Some(*mileage)
            }
            Self::VrmChange { .. } => None,
        }
    }

    /// Short label for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AdvertisedForSale { .. } => "advertised_for_sale",
            Self::MotTest { .. } => "mot_test",
            Self::VrmChange { .. } => "vrm_change",
        }
    }
}

/// An odometer reading taken on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MileageReading {
    pub date: NaiveDate,
    pub mileage: u32,
}

impl Event {
    pub const fn new(date: NaiveDate, kind: EventKind) -> Self {
        Self { date, kind }
    }

    /// A sale advertisement dated `date` (`YYYY-MM-DD`).
    pub fn advertised_for_sale(
        date: &str,
        price_pence: u64,
        mileage: u32,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            parse_date(date)?,
            EventKind::AdvertisedForSale {
                price_pence,
                mileage,
            },
        ))
    }

    /// An MOT test dated `date` (`YYYY-MM-DD`).
    pub fn mot_test(date: &str, mileage: u32, result: MotResult) -> Result<Self, ValidationError> {
        Ok(Self::new(
            parse_date(date)?,
            EventKind::MotTest { mileage, result },
        ))
    }

    /// A registration mark change dated `date` (`YYYY-MM-DD`).
    pub fn vrm_change(date: &str, from_vrm: &str, to_vrm: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(
            parse_date(date)?,
            EventKind::VrmChange {
                from_vrm: Vrm::new(from_vrm)?,
                to_vrm: Vrm::new(to_vrm)?,
            },
        ))
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// The odometer reading carried by this event, if it has one.
    pub const fn mileage(&self) -> Option<u32> {
        self.kind.mileage()
    }

    pub const fn has_mileage(&self) -> bool {
        self.mileage().is_some()
    }

    /// The dated reading for mileage-bearing events.
    pub fn reading(&self) -> Option<MileageReading> {
        self.mileage().map(|mileage| MileageReading {
            date: self.date,
            mileage,
        })
    }
}

/// Wire shape used to validate the date before building an [`Event`].
#[derive(Deserialize)]
struct RawEvent {
    #[serde(default)]
    date: Option<String>,
    #[serde(flatten)]
    kind: EventKind,
}

impl TryFrom<RawEvent> for Event {
    type Error = ValidationError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let date = parse_date(raw.date.as_deref().unwrap_or_default())?;
        Ok(Self::new(date, raw.kind))
    }
}
