//! Schedule pages saved to disk, one file per month.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use shiftcal_service::schedule::{CalendarCell, GridError, GridSource};

use super::cells_from_markup;

/// Grid source reading `<dir>/<YYYY-MM>.html` for each month.
#[derive(Debug, Clone)]
pub struct SnapshotGridSource {
    dir: PathBuf,
}

impl SnapshotGridSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Location of the saved page for the month containing `month`.
    #[must_use]
    pub fn page_path(&self, month: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.html", month.format("%Y-%m")))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl GridSource for SnapshotGridSource {
    fn render_month(&mut self, month: NaiveDate) -> Result<Vec<CalendarCell>, GridError> {
        let path = self.page_path(month);
        tracing::debug!(path = %path.display(), "Reading saved schedule page");

        let markup = std::fs::read_to_string(&path).map_err(|err| GridError::Unavailable {
            month,
            reason: format!("cannot read {}: {err}", path.display()),
        })?;

        cells_from_markup(month, &markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 18).unwrap()
    }

    #[test]
    fn page_path_uses_year_and_month() {
        let source = SnapshotGridSource::new("/var/lib/shiftcal");
        assert_eq!(
            source.page_path(may()),
            PathBuf::from("/var/lib/shiftcal/2024-05.html")
        );
    }

    #[test]
    fn missing_page_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = SnapshotGridSource::new(dir.path());

        assert!(matches!(
            source.render_month(may()),
            Err(GridError::Unavailable { month, .. }) if month == may()
        ));
    }

    #[test]
    fn reads_saved_page() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("2024-05.html"),
            r#"<div class="day has-actions"><div class="title">May 2</div>
               <div class="content">8AM - 4PM<br>Oakland</div></div>"#,
        )
        .unwrap();
        let mut source = SnapshotGridSource::new(dir.path());

        let cells = source.render_month(may()).unwrap();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].time_range(), Some("8AM - 4PM"));
        assert_eq!(source.dir(), dir.path());
    }
}
