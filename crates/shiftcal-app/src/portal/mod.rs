//! Grid sources backed by the scheduling portal.
//!
//! `PortalGridSource` fetches the live schedule page of each month,
//! `SnapshotGridSource` reads pages saved earlier. Both hand the markup to
//! `html::SchedulePage`.

pub mod fetch;
pub mod html;
pub mod snapshot;

use chrono::NaiveDate;
use shiftcal_core::config::PortalConfig;
use shiftcal_service::schedule::{CalendarCell, GridError, GridSource};
use tokio::runtime::Handle;

pub use fetch::PortalGridSource;
pub use html::SchedulePage;
pub use snapshot::SnapshotGridSource;

use crate::error::{AppError, AppResult};

/// Grid source that can be moved onto a blocking thread.
pub type BoxedGridSource = Box<dyn GridSource + Send>;

/// ## Summary
/// Picks the grid source for `config`: saved pages when a snapshot
/// directory is configured, the live portal otherwise.
///
/// ## Errors
/// Returns an error if the portal client cannot be created.
pub fn open_source(config: &PortalConfig, runtime: Handle) -> AppResult<BoxedGridSource> {
    if let Some(dir) = &config.snapshot_dir {
        tracing::info!(dir = %dir.display(), "Reading schedule pages from snapshots");
        return Ok(Box::new(SnapshotGridSource::new(dir.clone())));
    }

    tracing::info!(template = %config.url_template, "Reading schedule pages from the portal");
    Ok(Box::new(PortalGridSource::new(config.clone(), runtime)?))
}

/// ## Summary
/// Turns a fetched or saved page into grid cells.
///
/// ## Errors
/// Returns `GridError::Unauthenticated` for the sign-in form and
/// `GridError::Unavailable` if the markup cannot be read.
fn cells_from_markup(month: NaiveDate, markup: &str) -> Result<Vec<CalendarCell>, GridError> {
    let unreadable = |err: AppError| GridError::Unavailable {
        month,
        reason: err.to_string(),
    };

    let page = SchedulePage::parse(markup);
    if page.is_sign_in().map_err(unreadable)? {
        return Err(GridError::Unauthenticated);
    }

    let cells = page.cells().map_err(unreadable)?;
    if cells.is_empty() {
        tracing::warn!(%month, "Schedule page contains no day cells");
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn sign_in_markup_is_unauthenticated() {
        let markup = r#"<form action="/account/signin"><input id="Password"></form>"#;
        assert_eq!(cells_from_markup(may(), markup), Err(GridError::Unauthenticated));
    }

    #[test_log::test]
    fn page_without_days_yields_no_cells() {
        assert_eq!(cells_from_markup(may(), "<html></html>"), Ok(Vec::new()));
    }

    #[test]
    fn schedule_markup_yields_cells() {
        let markup = r#"<div class="day is-off"><div class="title">May 6</div></div>"#;
        let cells = cells_from_markup(may(), markup).unwrap();

        assert_eq!(cells.len(), 1);
        assert!(cells[0].markers.off);
    }
}
