//! Schedule extraction engine: turns rendered calendar grids into
//! normalized shift events and publishes them as iCalendar data.

pub mod error;
pub mod schedule;
