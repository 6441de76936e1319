//! iCalendar support (RFC 5545).
//!
//! - `core`: components, properties, parameters and values
//! - `build`: escaping, line folding and serialization
//! - `timezone`: localizing wall-clock times to UTC instants

pub mod build;
pub mod core;
pub mod timezone;
