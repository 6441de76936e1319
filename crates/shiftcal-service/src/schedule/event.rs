use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};
use shiftcal_core::constants::PTO_LOCATION;

/// One extracted schedule entry.
///
/// Timestamps are naive local wall-clock values. `start == end` marks an
/// all-day entry; the location `"PTO"` marks paid time off. Two events are
/// the same shift when start, end and location all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShiftEvent {
    start: NaiveDateTime,
    end: NaiveDateTime,
    location: String,
}

impl ShiftEvent {
    #[must_use]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, location: impl Into<String>) -> Self {
        Self {
            start,
            end,
            location: location.into(),
        }
    }

    /// Creates the all-day paid-time-off entry for `date`.
    #[must_use]
    pub fn pto(date: NaiveDate) -> Self {
        let midnight = date.and_time(chrono::NaiveTime::MIN);
        Self::new(midnight, midnight, PTO_LOCATION)
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Whether the entry has no time of day and spans its whole start date.
    #[must_use]
    pub fn is_all_day(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn is_pto(&self) -> bool {
        self.location == PTO_LOCATION
    }

    #[must_use]
    pub(crate) fn with_end(self, end: NaiveDateTime) -> Self {
        Self { end, ..self }
    }
}

impl Ord for ShiftEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.location.cmp(&other.location))
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for ShiftEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
