use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::constants::{CALENDAR_FILE_EXTENSION, DATE_PLACEHOLDER, DEFAULT_PORTAL_URL_TEMPLATE};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub portal: PortalConfig,
    pub schedule: ScheduleConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Deserialize)]
pub struct PortalConfig {
    pub url_template: String,
    /// Cookie header value for an already authenticated portal session.
    pub session_cookie: Option<String>,
    pub timeout_secs: u64,
    /// Directory of saved `YYYY-MM.html` pages used instead of the live portal.
    pub snapshot_dir: Option<PathBuf>,
}

impl fmt::Debug for PortalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortalConfig")
            .field("url_template", &self.url_template)
            .field(
                "session_cookie",
                &self.session_cookie.as_ref().map(|_cookie| "<redacted>"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .field("snapshot_dir", &self.snapshot_dir)
            .finish()
    }
}

impl PortalConfig {
    /// ## Summary
    /// Returns the schedule page URL for the month containing `date`.
    ///
    /// The portal expects the query date as `MM/DD/YYYY`.
    #[must_use]
    pub fn url_for(&self, date: NaiveDate) -> String {
        self.url_template
            .replace(DATE_PLACEHOLDER, &date.format("%m/%d/%Y").to_string())
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Number of days past today that must be covered by the queried months.
    pub horizon_days: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Display name of the calendar, also used as the output file stem.
    pub name: String,
    /// Label prefixed to every non-PTO location.
    pub organization: String,
    pub timezone: String,
    pub summary: String,
    pub output_dir: PathBuf,
}

impl CalendarConfig {
    /// ## Summary
    /// Resolves the configured IANA timezone.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the name is not a known timezone.
    pub fn tz(&self) -> CoreResult<Tz> {
        Tz::from_str(&self.timezone).map_err(|_e| {
            CoreError::InvalidConfiguration(format!("unknown timezone '{}'", self.timezone))
        })
    }

    /// ## Summary
    /// Returns the path of the calendar file written by the application.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{CALENDAR_FILE_EXTENSION}", self.name))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and an optional
    /// `config.toml`. Environment variables use the `SHIFTCAL_` prefix and `__`
    /// between sections, e.g. `SHIFTCAL_PORTAL__SESSION_COOKIE`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("SHIFTCAL")
            .prefix_separator("_")
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    fn load_from(environment: config::Environment) -> Result<Self> {
        Ok(Config::builder()
            .set_default("portal.url_template", DEFAULT_PORTAL_URL_TEMPLATE)?
            .set_default("portal.timeout_secs", 30)?
            .set_default("schedule.horizon_days", 30)?
            .set_default("calendar.name", "Schedule")?
            .set_default("calendar.organization", "")?
            .set_default("calendar.timezone", "America/Los_Angeles")?
            .set_default("calendar.summary", "Work")?
            .set_default("calendar.output_dir", ".")?
            .set_default("logging.level", "info")?
            .add_source(environment)
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot drive a run.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` describing the first bad value.
    pub fn validate(&self) -> CoreResult<()> {
        self.calendar.tz()?;

        if self.portal.timeout_secs == 0 {
            return Err(CoreError::InvalidConfiguration(
                "portal.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.schedule.horizon_days < 0 {
            return Err(CoreError::InvalidConfiguration(format!(
                "schedule.horizon_days must not be negative, got {}",
                self.schedule.horizon_days
            )));
        }
        if self.calendar.name.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "calendar.name must not be empty".to_string(),
            ));
        }
        if self.portal.snapshot_dir.is_none() && !self.portal.url_template.contains(DATE_PLACEHOLDER)
        {
            tracing::warn!(
                template = %self.portal.url_template,
                "Portal URL template has no date placeholder; every month will fetch the same page"
            );
        }

        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading, deserializing or validating the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    settings.validate()?;
    Ok(settings)
}
