//! One export run: query window, extraction, rendering and file output.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use shiftcal_core::config::Settings;
use shiftcal_service::schedule::export::{CalendarOptions, render_calendar};
use shiftcal_service::schedule::window::query_months;
use shiftcal_service::schedule::{ExtractionReport, ScheduleEngine};
use tokio::runtime::Handle;

use crate::calendar_file::write_calendar;
use crate::error::AppResult;
use crate::portal;

/// Result of a completed export.
#[derive(Debug)]
pub struct ExportSummary {
    /// Calendar file that was written.
    pub path: PathBuf,
    pub report: ExtractionReport,
}

/// ## Summary
/// Today's date in the configured calendar timezone.
///
/// ## Errors
/// Returns `AppError::CoreError` if the timezone is unknown.
pub fn local_today(settings: &Settings) -> AppResult<NaiveDate> {
    Ok(Utc::now()
        .with_timezone(&settings.calendar.tz()?)
        .date_naive())
}

/// ## Summary
/// Extracts the schedule for the configured window starting at `today` and
/// writes it as an iCalendar file.
///
/// Extraction runs on a blocking thread; portal requests are driven on the
/// current runtime.
///
/// ## Errors
/// Returns an error if the window is invalid, the grid source fails in a way
/// the engine does not skip, rendering fails or the file cannot be written.
///
/// ## Side Effects
/// Replaces `<output_dir>/<name>.ics`.
#[tracing::instrument(skip(settings, stamp))]
pub async fn export_schedule(
    settings: &Settings,
    today: NaiveDate,
    stamp: DateTime<Utc>,
) -> AppResult<ExportSummary> {
    let months = query_months(today, settings.schedule.horizon_days)?;
    tracing::info!(
        months = ?months,
        horizon_days = settings.schedule.horizon_days,
        "Extracting schedule"
    );

    let source = portal::open_source(&settings.portal, Handle::current())?;
    let report =
        tokio::task::spawn_blocking(move || ScheduleEngine::new(source, today).run(months))
            .await??;

    let options = CalendarOptions::from_config(&settings.calendar, stamp);
    let contents = render_calendar(&report.events, &options)?;

    let path = settings.calendar.output_path();
    write_calendar(&path, &contents).await?;

    tracing::info!(
        path = %path.display(),
        events = report.events.len(),
        skipped_cells = report.skipped_cells.len(),
        skipped_months = report.skipped_months.len(),
        "Calendar exported"
    );

    Ok(ExportSummary { path, report })
}
