//! Properties (RFC 5545 §3.8).

use super::{Date, DateTime, Parameter, Value};

/// A property: name, parameters and value.
///
/// `raw_value` is the value as written on the content line, before TEXT
/// escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Uppercase property name.
    pub name: String,
    pub params: Vec<Parameter>,
    pub value: Value,
    pub raw_value: String,
}

impl Property {
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let text = value.into();
        Self::with_value(name, Vec::new(), text.clone(), Value::Text(text))
    }

    /// DATE-TIME property in UTC form.
    #[must_use]
    pub fn datetime(name: impl Into<String>, dt: DateTime) -> Self {
        Self::with_value(name, Vec::new(), dt.to_string(), Value::DateTime(dt))
    }

    /// DATE property; carries `VALUE=DATE` since DATE-TIME is the default
    /// type of `DTSTART` and `DTEND`.
    #[must_use]
    pub fn date(name: impl Into<String>, date: Date) -> Self {
        Self::with_value(
            name,
            vec![Parameter::value_type("DATE")],
            date.to_string(),
            Value::Date(date),
        )
    }

    fn with_value(
        name: impl Into<String>,
        params: Vec<Parameter>,
        raw_value: String,
        value: Value,
    ) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params,
            value,
            raw_value,
        }
    }

    /// Returns the value of the parameter named `name` (case-insensitive).
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|param| param.name.eq_ignore_ascii_case(name))
            .map(|param| param.value.as_str())
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }
}

/// Property names written by the calendar export.
pub mod names {
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";
    pub const CALSCALE: &str = "CALSCALE";
    pub const METHOD: &str = "METHOD";

    pub const UID: &str = "UID";
    pub const DTSTAMP: &str = "DTSTAMP";
    pub const DTSTART: &str = "DTSTART";
    pub const DTEND: &str = "DTEND";
    pub const SUMMARY: &str = "SUMMARY";
    pub const LOCATION: &str = "LOCATION";
    pub const TRANSP: &str = "TRANSP";

    // Non-standard calendar properties understood by Apple and Google clients
    pub const X_WR_CALNAME: &str = "X-WR-CALNAME";
    pub const X_WR_TIMEZONE: &str = "X-WR-TIMEZONE";
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn text_property() {
        let prop = Property::text("summary", "Work");
        assert_eq!(prop.name, "SUMMARY");
        assert_eq!(prop.as_text(), Some("Work"));
        assert!(prop.params.is_empty());
    }

    #[test]
    fn date_property_sets_value_param() {
        let prop = Property::date(
            names::DTSTART,
            Date::from(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
        );
        assert_eq!(prop.param("value"), Some("DATE"));
        assert_eq!(prop.raw_value, "20240601");
        assert_eq!(prop.as_text(), None);
    }

    #[test]
    fn datetime_property_has_no_params() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap();
        let prop = Property::datetime(names::DTEND, DateTime::utc(instant));
        assert_eq!(prop.raw_value, "20240601T150000Z");
        assert_eq!(prop.param("TZID"), None);
        assert_eq!(prop.value, Value::DateTime(DateTime::utc(instant)));
    }
}
