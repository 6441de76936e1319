//! Shared configuration, constants and error types for shiftcal.

pub mod config;
pub mod constants;
pub mod error;
