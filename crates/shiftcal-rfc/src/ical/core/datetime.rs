//! DATE-TIME values (RFC 5545 §3.3.5).

use std::fmt;

use chrono::Utc;

/// A DATE-TIME in UTC form, written as `19980119T070000Z`.
///
/// Local wall-clock times are converted with `timezone::convert_to_utc`
/// before they become a `DateTime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    instant: chrono::DateTime<Utc>,
}

impl DateTime {
    #[must_use]
    pub const fn utc(instant: chrono::DateTime<Utc>) -> Self {
        Self { instant }
    }

    #[must_use]
    pub const fn instant(&self) -> chrono::DateTime<Utc> {
        self.instant
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instant.format("%Y%m%dT%H%M%SZ"))
    }
}
