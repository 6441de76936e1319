use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;

use super::CalendarCell;

/// Failures of the rendering side while producing a month grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Timed out after {timeout:?} waiting for the grid of {month}")]
    Timeout { month: NaiveDate, timeout: Duration },

    #[error("Grid of {month} unavailable: {reason}")]
    Unavailable { month: NaiveDate, reason: String },

    #[error("Session is not authenticated")]
    Unauthenticated,
}

/// Supplies the rendered day cells of one month.
///
/// Implementations block until the grid is ready or their own timeout
/// elapses, which they report as `GridError::Timeout`.
pub trait GridSource {
    /// ## Summary
    /// Renders the grid that contains `month` and returns its day cells in
    /// document order.
    ///
    /// ## Errors
    /// Returns a `GridError` when the grid cannot be produced.
    fn render_month(&mut self, month: NaiveDate) -> Result<Vec<CalendarCell>, GridError>;
}

impl<S: GridSource + ?Sized> GridSource for Box<S> {
    fn render_month(&mut self, month: NaiveDate) -> Result<Vec<CalendarCell>, GridError> {
        (**self).render_month(month)
    }
}

impl<S: GridSource + ?Sized> GridSource for &mut S {
    fn render_month(&mut self, month: NaiveDate) -> Result<Vec<CalendarCell>, GridError> {
        (**self).render_month(month)
    }
}
