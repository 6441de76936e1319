//! Publishing extracted events as an iCalendar document.

use chrono::{Days, Utc};
use sha2::{Digest, Sha256};
use shiftcal_core::config::CalendarConfig;
use shiftcal_core::constants::{PRODID, PRODUCT_NAME, PTO_LOCATION};
use shiftcal_rfc::error::RfcError;
use shiftcal_rfc::ical::build::serialize;
use shiftcal_rfc::ical::core::{Component, Date, DateTime, ICalendar, Property, names};
use shiftcal_rfc::ical::timezone::{TimeZoneResolver, convert_to_utc_lenient};

use super::ShiftEvent;
use crate::error::ServiceResult;

/// Hex digits of the content hash kept in generated UIDs.
const UID_HASH_LEN: usize = 32;

/// Calendar-level settings of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Display name (`X-WR-CALNAME`).
    pub name: String,
    /// IANA timezone the naive event timestamps are localized to.
    pub timezone: String,
    /// Label prefixed to every non-PTO location; empty for none.
    pub organization: String,
    /// Summary of shift events.
    pub summary: String,
    /// `DTSTAMP` written on every event.
    pub stamp: chrono::DateTime<Utc>,
}

impl CalendarOptions {
    #[must_use]
    pub fn from_config(config: &CalendarConfig, stamp: chrono::DateTime<Utc>) -> Self {
        Self {
            name: config.name.clone(),
            timezone: config.timezone.clone(),
            organization: config.organization.clone(),
            summary: config.summary.clone(),
            stamp,
        }
    }

    fn location_text(&self, location: &str) -> String {
        let organization = self.organization.trim();
        if organization.is_empty() {
            location.to_string()
        } else {
            format!("{organization} {location}")
        }
    }
}

/// ## Summary
/// Builds the calendar document for `events`.
///
/// Entries with `start == end` become all-day events (`DTSTART;VALUE=DATE`,
/// `DTEND` on the following day). Timed events are localized to
/// `options.timezone` and written in UTC. PTO entries carry no location and
/// are marked transparent.
///
/// ## Errors
/// Returns `RfcError::Conversion` if the timezone is unknown.
pub fn build_calendar(events: &[ShiftEvent], options: &CalendarOptions) -> ServiceResult<ICalendar> {
    let mut resolver = TimeZoneResolver::new();
    resolver
        .resolve(&options.timezone)
        .map_err(RfcError::from)?;

    let mut calendar = ICalendar::new(PRODID);
    calendar.add_property(Property::text(names::CALSCALE, "GREGORIAN"));
    calendar.add_property(Property::text(names::METHOD, "PUBLISH"));
    calendar.add_property(Property::text(names::X_WR_CALNAME, &options.name));
    calendar.add_property(Property::text(names::X_WR_TIMEZONE, &options.timezone));

    for event in events {
        calendar.add_event(build_event(event, options, &mut resolver)?);
    }

    tracing::debug!(
        name = %options.name,
        events = events.len(),
        "Calendar built"
    );

    Ok(calendar)
}

/// ## Summary
/// Builds and serializes the calendar for `events`.
///
/// ## Errors
/// See `build_calendar`.
pub fn render_calendar(events: &[ShiftEvent], options: &CalendarOptions) -> ServiceResult<String> {
    Ok(serialize(&build_calendar(events, options)?))
}

fn build_event(
    event: &ShiftEvent,
    options: &CalendarOptions,
    resolver: &mut TimeZoneResolver,
) -> ServiceResult<Component> {
    let mut component = Component::event();
    component.add_property(Property::text(names::UID, event_uid(event)));
    component.add_property(Property::datetime(
        names::DTSTAMP,
        DateTime::utc(options.stamp),
    ));

    if event.is_all_day() {
        let day = event.start().date();
        let next_day = day.checked_add_days(Days::new(1)).unwrap_or(day);
        component.add_property(Property::date(names::DTSTART, Date(day)));
        component.add_property(Property::date(names::DTEND, Date(next_day)));
    } else {
        for (name, local) in [(names::DTSTART, event.start()), (names::DTEND, event.end())] {
            let instant =
                convert_to_utc_lenient(local, &options.timezone, resolver).map_err(RfcError::from)?;
            component.add_property(Property::datetime(name, DateTime::utc(instant)));
        }
    }

    if event.is_pto() {
        component.add_property(Property::text(names::SUMMARY, PTO_LOCATION));
        component.add_property(Property::text(names::TRANSP, "TRANSPARENT"));
    } else {
        component.add_property(Property::text(names::SUMMARY, &options.summary));
        component.add_property(Property::text(
            names::LOCATION,
            options.location_text(event.location()),
        ));
        component.add_property(Property::text(names::TRANSP, "OPAQUE"));
    }

    Ok(component)
}

/// Stable identifier derived from the event's identity, so re-exports of the
/// same shift keep their UID.
fn event_uid(event: &ShiftEvent) -> String {
    let mut hasher = Sha256::new();
    hasher.update(event.start().to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(event.end().to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(event.location().as_bytes());
    let hash = hex::encode(hasher.finalize());

    format!("{}@{PRODUCT_NAME}", &hash[..UID_HASH_LEN])
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeZone};

    use super::*;
    use crate::error::ServiceError;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn options() -> CalendarOptions {
        CalendarOptions {
            name: "Kaiser".to_string(),
            timezone: "America/Los_Angeles".to_string(),
            organization: "Kaiser".to_string(),
            summary: "Work".to_string(),
            stamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn calendar_header() {
        let calendar = build_calendar(&[], &options()).unwrap();

        assert_eq!(calendar.version(), Some("2.0"));
        assert_eq!(calendar.prodid(), Some(PRODID));
        assert_eq!(calendar.display_name(), Some("Kaiser"));
        assert!(calendar.events().is_empty());
    }

    #[test]
    fn timed_event_is_written_in_utc() {
        let events = [ShiftEvent::new(at(10, 22, 0), at(11, 6, 0), "Oakland")];
        let calendar = build_calendar(&events, &options()).unwrap();
        let event = calendar.events()[0];

        assert_eq!(
            event.get_property(names::DTSTART).map(|p| p.raw_value.as_str()),
            Some("20240511T050000Z")
        );
        assert_eq!(
            event.get_property(names::DTEND).map(|p| p.raw_value.as_str()),
            Some("20240511T130000Z")
        );
        assert_eq!(event.summary(), Some("Work"));
        assert_eq!(event.location(), Some("Kaiser Oakland"));
    }

    #[test]
    fn pto_is_all_day_without_location() {
        let events = [ShiftEvent::pto(NaiveDate::from_ymd_opt(2024, 5, 7).unwrap())];
        let text = render_calendar(&events, &options()).unwrap();

        assert!(text.contains("DTSTART;VALUE=DATE:20240507\r\n"));
        assert!(text.contains("DTEND;VALUE=DATE:20240508\r\n"));
        assert!(text.contains("SUMMARY:PTO\r\n"));
        assert!(text.contains("TRANSP:TRANSPARENT\r\n"));
        assert!(!text.contains("LOCATION"));
    }

    #[test]
    fn empty_organization_keeps_bare_location() {
        let mut options = options();
        options.organization = "  ".to_string();
        let events = [ShiftEvent::new(at(1, 8, 0), at(1, 16, 0), "Oakland")];
        let calendar = build_calendar(&events, &options).unwrap();

        assert_eq!(calendar.events()[0].location(), Some("Oakland"));
    }

    #[test]
    fn uid_is_stable_and_distinct() {
        let a = ShiftEvent::new(at(1, 8, 0), at(1, 16, 0), "Oakland");
        let b = ShiftEvent::new(at(1, 8, 0), at(1, 16, 0), "Richmond");

        assert_eq!(event_uid(&a), event_uid(&a.clone()));
        assert_ne!(event_uid(&a), event_uid(&b));
        assert!(event_uid(&a).ends_with("@shiftcal"));
        assert_eq!(event_uid(&a).len(), UID_HASH_LEN + "@shiftcal".len());
    }

    #[test]
    fn rendered_document_is_wrapped_and_stamped() {
        let events = [ShiftEvent::new(at(1, 8, 0), at(1, 16, 0), "Oakland")];
        let text = render_calendar(&events, &options()).unwrap();

        assert!(text.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(text.ends_with("END:VCALENDAR\r\n"));
        assert!(text.contains("BEGIN:VEVENT\r\n"));
        assert!(text.contains("DTSTAMP:20240501T120000Z\r\n"));
        assert!(text.contains("X-WR-TIMEZONE:America/Los_Angeles\r\n"));
        assert!(text.contains("DTSTART:20240501T150000Z\r\n"));
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        let mut options = options();
        options.timezone = "Mars/Olympus".to_string();

        assert!(matches!(
            build_calendar(&[], &options),
            Err(ServiceError::RfcError(RfcError::Conversion(_)))
        ));
    }
}
