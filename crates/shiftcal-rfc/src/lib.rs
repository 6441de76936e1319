//! iCalendar (RFC 5545) model, serialization and timezone localization.

pub mod error;
pub mod ical;
