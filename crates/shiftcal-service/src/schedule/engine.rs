use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::{
    CalendarCell, GridError, GridSource, MonthCursor, ScheduleError, ShiftEvent, classify,
    extract, normalize,
};
use crate::error::{ServiceError, ServiceResult};
use crate::schedule::window::first_of_month;

/// A cell that could not be turned into an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCell {
    /// Query month of the grid the cell belongs to.
    pub month: NaiveDate,
    /// Position of the cell in the grid.
    pub index: usize,
    pub label: Option<String>,
    pub error: ScheduleError,
}

/// A month whose grid timed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedMonth {
    pub month: NaiveDate,
    pub reason: GridError,
}

/// Outcome of one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Overnight-corrected, deduplicated events in chronological order.
    pub events: Vec<ShiftEvent>,
    pub skipped_cells: Vec<SkippedCell>,
    pub skipped_months: Vec<SkippedMonth>,
}

/// Drives extraction over the months of a query window.
///
/// One grid is fully scanned before the next one is requested. Each grid gets
/// a fresh `MonthCursor`.
pub struct ScheduleEngine<S> {
    source: S,
    today: NaiveDate,
}

impl<S: GridSource> ScheduleEngine<S> {
    /// Creates an engine reading grids from `source`; `today` resolves cells
    /// marked as the current day.
    pub const fn new(source: S, today: NaiveDate) -> Self {
        Self { source, today }
    }

    /// Gives the grid source back.
    pub fn into_source(self) -> S {
        self.source
    }

    /// ## Summary
    /// Extracts the events of every month in `query_dates`.
    ///
    /// ## Errors
    /// See `run`.
    pub fn extract_schedule(
        &mut self,
        query_dates: impl IntoIterator<Item = NaiveDate>,
    ) -> ServiceResult<Vec<ShiftEvent>> {
        self.run(query_dates).map(|report| report.events)
    }

    /// ## Summary
    /// Scans one grid per distinct month among `query_dates` and returns the
    /// normalized events together with everything that was skipped.
    ///
    /// Cells that fail to classify or extract are logged and skipped. A month
    /// whose grid times out is logged and skipped.
    ///
    /// ## Errors
    /// - `ServiceError::NotAuthenticated` if the grid source has no valid
    ///   session.
    /// - `ServiceError::GridUnavailable` if a grid fails for any reason other
    ///   than a timeout.
    /// - `ServiceError::NoGridAvailable` if months were requested and every
    ///   one of them timed out.
    #[tracing::instrument(skip(self, query_dates), fields(today = %self.today))]
    pub fn run(
        &mut self,
        query_dates: impl IntoIterator<Item = NaiveDate>,
    ) -> ServiceResult<ExtractionReport> {
        let months: BTreeSet<NaiveDate> = query_dates.into_iter().map(first_of_month).collect();
        tracing::debug!(months = months.len(), "Starting schedule extraction");

        let mut candidates = Vec::new();
        let mut report = ExtractionReport::default();

        for month in months.iter().copied() {
            let cells = match self.source.render_month(month) {
                Ok(cells) => cells,
                Err(err @ GridError::Timeout { .. }) => {
                    tracing::warn!(%month, error = %err, "Skipping month");
                    report.skipped_months.push(SkippedMonth { month, reason: err });
                    continue;
                }
                Err(GridError::Unauthenticated) => return Err(ServiceError::NotAuthenticated),
                Err(err) => return Err(ServiceError::GridUnavailable(err)),
            };

            tracing::debug!(%month, cells = cells.len(), "Scanning grid");
            self.scan_grid(month, &cells, &mut candidates, &mut report.skipped_cells);
        }

        if !months.is_empty() && report.skipped_months.len() == months.len() {
            return Err(ServiceError::NoGridAvailable {
                requested: months.len(),
            });
        }

        report.events = normalize(candidates);
        tracing::info!(
            months = months.len(),
            events = report.events.len(),
            skipped_cells = report.skipped_cells.len(),
            skipped_months = report.skipped_months.len(),
            "Schedule extracted"
        );

        Ok(report)
    }

    fn scan_grid(
        &self,
        month: NaiveDate,
        cells: &[CalendarCell],
        candidates: &mut Vec<ShiftEvent>,
        skipped: &mut Vec<SkippedCell>,
    ) {
        let mut cursor = MonthCursor::new(month);

        for (index, cell) in cells.iter().enumerate() {
            match self.scan_cell(cell, &mut cursor) {
                Ok(Some(event)) => candidates.push(event),
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(
                        %month,
                        index,
                        label = cell.label().unwrap_or_default(),
                        %error,
                        "Skipping day"
                    );
                    skipped.push(SkippedCell {
                        month,
                        index,
                        label: cell.label().map(str::to_string),
                        error,
                    });
                }
            }
        }
    }

    fn scan_cell(
        &self,
        cell: &CalendarCell,
        cursor: &mut MonthCursor,
    ) -> Result<Option<ShiftEvent>, ScheduleError> {
        let classification = classify(cell, cursor, self.today)?;
        let Some(date) = classification.date else {
            return Ok(None);
        };
        extract(cell, classification.kind, date)
    }
}
