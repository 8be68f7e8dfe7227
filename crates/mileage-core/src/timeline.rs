//! Chronological event history for a single vehicle.

use serde::{Deserialize, Serialize};

use crate::event::{Event, MileageReading};

/// An append-only collection of events.
///
/// Events are stored in insertion order and sorted by date on every read.
/// Timelines are small and read far less often than they are built, so there
/// is no ordered structure to maintain on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    events: Vec<Event>,
}

impl Timeline {
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event. Duplicates are kept.
    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events, oldest first. Same-day events keep their insertion order.
    pub fn events(&self) -> Vec<&Event> {
        self.events_where(|_| true)
    }

    /// Events matching `filter`, oldest first.
    pub fn events_where<F>(&self, filter: F) -> Vec<&Event>
    where
        F: Fn(&Event) -> bool,
    {
        let mut selected: Vec<&Event> = self.events.iter().filter(|&e| filter(e)).collect();
        // sort_by_key is stable, which keeps ties in insertion order
        selected.sort_by_key(|e| e.date());
        selected
    }

    /// Odometer readings from mileage-bearing events, oldest first.
    pub fn mileage_readings(&self) -> Vec<MileageReading> {
        self.events_where(Event::has_mileage)
            .into_iter()
            .filter_map(Event::reading)
            .collect()
    }

    /// The most recent odometer reading.
    ///
    /// When several readings share the latest date, the last one added wins.
    pub fn latest_reading(&self) -> Option<MileageReading> {
        self.mileage_readings().last().copied()
    }
}

impl FromIterator<Event> for Timeline {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl Extend<Event> for Timeline {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}
