//! End-to-end export from saved portal pages to an `.ics` file.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, TimeZone, Utc};
use shiftcal_app::error::AppError;
use shiftcal_app::export::export_schedule;
use shiftcal_core::config::{
    CalendarConfig, LoggingConfig, PortalConfig, ScheduleConfig, Settings,
};
use shiftcal_core::constants::DEFAULT_PORTAL_URL_TEMPLATE;
use shiftcal_service::error::ServiceError;
use shiftcal_service::schedule::ShiftEvent;

fn settings(snapshot_dir: PathBuf, output_dir: &Path) -> Settings {
    Settings {
        portal: PortalConfig {
            url_template: DEFAULT_PORTAL_URL_TEMPLATE.to_string(),
            session_cookie: None,
            timeout_secs: 5,
            snapshot_dir: Some(snapshot_dir),
        },
        schedule: ScheduleConfig { horizon_days: 30 },
        calendar: CalendarConfig {
            name: "Kaiser".to_string(),
            organization: "Kaiser".to_string(),
            timezone: "America/Los_Angeles".to_string(),
            summary: "Work".to_string(),
            output_dir: output_dir.to_path_buf(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    }
}

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn ymd(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

#[test_log::test(tokio::test)]
async fn exports_fixture_months_to_calendar_file() {
    let out = tempfile::tempdir().unwrap();
    let settings = settings(fixtures(), out.path());
    let stamp = Utc.with_ymd_and_hms(2024, 5, 18, 7, 0, 0).unwrap();

    let summary = export_schedule(&settings, ymd(5, 18), stamp).await.unwrap();

    assert_eq!(summary.path, out.path().join("Kaiser.ics"));

    let at = |month, day, hour, minute| ymd(month, day).and_hms_opt(hour, minute, 0).unwrap();
    assert_eq!(
        summary.report.events,
        vec![
            ShiftEvent::new(at(5, 2, 8, 0), at(5, 2, 16, 30), "Oakland"),
            ShiftEvent::pto(ymd(5, 3)),
            ShiftEvent::new(at(5, 10, 22, 0), at(5, 11, 6, 0), "Richmond"),
            ShiftEvent::new(at(5, 18, 9, 0), at(5, 18, 17, 30), "Oakland"),
            ShiftEvent::new(at(5, 31, 16, 0), at(6, 1, 0, 0), "Oakland"),
            ShiftEvent::new(at(6, 1, 8, 0), at(6, 1, 16, 0), "Oakland"),
            ShiftEvent::pto(ymd(6, 2)),
            ShiftEvent::new(at(6, 3, 7, 0), at(6, 3, 15, 30), "Walnut Creek"),
        ]
    );
    assert_eq!(summary.report.skipped_cells.len(), 1);
    assert_eq!(summary.report.skipped_cells[0].label.as_deref(), Some("11"));

    let ics = std::fs::read_to_string(&summary.path).unwrap();
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.contains("X-WR-CALNAME:Kaiser\r\n"));
    assert_eq!(ics.matches("BEGIN:VEVENT\r\n").count(), 8);
    assert_eq!(ics.matches("SUMMARY:PTO\r\n").count(), 2);
    assert!(ics.contains("DTSTART:20240502T150000Z\r\n"));
    assert!(ics.contains("DTSTART;VALUE=DATE:20240503\r\n"));
    assert!(ics.contains("LOCATION:Kaiser Walnut Creek\r\n"));
    assert!(ics.contains("DTSTAMP:20240518T070000Z\r\n"));
}

#[test_log::test(tokio::test)]
async fn missing_month_page_fails_the_export() {
    let out = tempfile::tempdir().unwrap();
    let settings = settings(fixtures(), out.path());

    let result = export_schedule(&settings, ymd(6, 20), Utc::now()).await;

    assert!(matches!(
        result,
        Err(AppError::ServiceError(ServiceError::GridUnavailable(_)))
    ));
    assert!(!out.path().join("Kaiser.ics").exists());
}

#[test_log::test(tokio::test)]
async fn negative_horizon_is_rejected() {
    let out = tempfile::tempdir().unwrap();
    let mut settings = settings(fixtures(), out.path());
    settings.schedule.horizon_days = -5;

    assert!(matches!(
        export_schedule(&settings, ymd(5, 18), Utc::now()).await,
        Err(AppError::ServiceError(ServiceError::CoreError(_)))
    ));
}
