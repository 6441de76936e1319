//! Localizing wall-clock shift times to UTC instants.

use std::collections::HashMap;

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// The local time falls in a daylight-saving gap.
    #[error("{local} does not exist in {tzid}")]
    NonExistentTime { local: NaiveDateTime, tzid: String },
}

/// IANA timezone lookup, memoized by name.
#[derive(Debug, Default)]
pub struct TimeZoneResolver {
    resolved: HashMap<String, Tz>,
}

impl TimeZoneResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Looks up the IANA timezone named `tzid`.
    ///
    /// ## Errors
    /// Returns `ConversionError::UnknownTimezone` for names outside the IANA
    /// database.
    pub fn resolve(&mut self, tzid: &str) -> Result<Tz, ConversionError> {
        let name = tzid.trim();
        if let Some(tz) = self.resolved.get(name) {
            return Ok(*tz);
        }

        let tz: Tz = name
            .parse()
            .map_err(|_e| ConversionError::UnknownTimezone(tzid.to_string()))?;
        self.resolved.insert(name.to_string(), tz);

        Ok(tz)
    }
}

/// ## Summary
/// Interprets `local` as wall-clock time in `tzid` and returns the instant.
/// A time that occurs twice (end of daylight saving) takes the earlier one.
///
/// ## Errors
/// - `ConversionError::UnknownTimezone` if `tzid` does not resolve.
/// - `ConversionError::NonExistentTime` if `local` is skipped by a
///   daylight-saving transition.
pub fn convert_to_utc(
    local: NaiveDateTime,
    tzid: &str,
    resolver: &mut TimeZoneResolver,
) -> Result<DateTime<Utc>, ConversionError> {
    let tz = resolver.resolve(tzid)?;

    match tz.from_local_datetime(&local) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => {
            Ok(instant.with_timezone(&Utc))
        }
        LocalResult::None => Err(ConversionError::NonExistentTime {
            local,
            tzid: tzid.to_string(),
        }),
    }
}

/// ## Summary
/// Like `convert_to_utc`, but a time inside a daylight-saving gap moves one
/// hour later instead of failing.
///
/// ## Errors
/// Returns `ConversionError::UnknownTimezone` if `tzid` does not resolve.
pub fn convert_to_utc_lenient(
    local: NaiveDateTime,
    tzid: &str,
    resolver: &mut TimeZoneResolver,
) -> Result<DateTime<Utc>, ConversionError> {
    match convert_to_utc(local, tzid, resolver) {
        Err(ConversionError::NonExistentTime { .. }) => {
            tracing::debug!(%local, tzid, "Shift time falls in a DST gap, moving it forward");
            convert_to_utc(local + chrono::Duration::hours(1), tzid, resolver)
        }
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const LOS_ANGELES: &str = "America/Los_Angeles";

    fn local(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn utc(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, day, hour, minute, 0).unwrap()
    }

    #[test]
    fn resolves_and_memoizes_iana_names() {
        let mut resolver = TimeZoneResolver::new();

        assert_eq!(resolver.resolve(LOS_ANGELES).unwrap(), Tz::America__Los_Angeles);
        assert_eq!(resolver.resolve(" America/Chicago ").unwrap(), Tz::America__Chicago);
        assert!(resolver.resolved.contains_key("America/Chicago"));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let mut resolver = TimeZoneResolver::new();

        assert!(matches!(
            resolver.resolve("Mars/Olympus"),
            Err(ConversionError::UnknownTimezone(name)) if name == "Mars/Olympus"
        ));
    }

    #[test]
    fn standard_and_daylight_offsets() {
        let mut resolver = TimeZoneResolver::new();

        assert_eq!(
            convert_to_utc(local(1, 15, 22, 0), LOS_ANGELES, &mut resolver).unwrap(),
            utc(1, 16, 6, 0)
        );
        assert_eq!(
            convert_to_utc(local(5, 10, 22, 0), LOS_ANGELES, &mut resolver).unwrap(),
            utc(5, 11, 5, 0)
        );
    }

    #[test]
    fn repeated_hour_takes_earlier_instant() {
        let mut resolver = TimeZoneResolver::new();

        assert_eq!(
            convert_to_utc(local(11, 3, 1, 30), LOS_ANGELES, &mut resolver).unwrap(),
            utc(11, 3, 8, 30)
        );
    }

    #[test]
    fn skipped_hour_is_an_error() {
        let mut resolver = TimeZoneResolver::new();

        assert!(matches!(
            convert_to_utc(local(3, 10, 2, 30), LOS_ANGELES, &mut resolver),
            Err(ConversionError::NonExistentTime { .. })
        ));
    }

    #[test_log::test]
    fn lenient_conversion_moves_skipped_hour_forward() {
        let mut resolver = TimeZoneResolver::new();

        assert_eq!(
            convert_to_utc_lenient(local(3, 10, 2, 30), LOS_ANGELES, &mut resolver).unwrap(),
            utc(3, 10, 10, 30)
        );
    }
}
