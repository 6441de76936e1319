use thiserror::Error;

/// Per-cell failures. All of them are recoverable: the engine logs the
/// offending day, records it in the run report and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid time format: '{0}'")]
    InvalidTimeFormat(String),

    #[error("Malformed shift text: '{0}' (expected '<start> <separator> <end>')")]
    MalformedShiftText(String),

    #[error("Missing element: {0}")]
    MissingElement(&'static str),

    #[error("Invalid day label: '{0}'")]
    InvalidDayLabel(String),
}
