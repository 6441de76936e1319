//! Application layer: portal access, grid sources and calendar file output
//! around the schedule extraction engine.

pub mod calendar_file;
pub mod error;
pub mod export;
pub mod portal;
