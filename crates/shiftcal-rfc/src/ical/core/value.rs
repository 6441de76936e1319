//! Property values (RFC 5545 §3.3).

use std::fmt;

use chrono::NaiveDate;

use super::DateTime;

/// DATE value (RFC 5545 §3.3.4), written as `19970714`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(pub NaiveDate);

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d"))
    }
}

/// Typed property value. TEXT is held unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Date(Date),
    DateTime(DateTime),
    Text(String),
}

impl Value {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Date(_) | Self::DateTime(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_display() {
        let date = Date::from(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(date.to_string(), "20240601");
    }

    #[test]
    fn only_text_has_text() {
        assert_eq!(Value::Text("PTO".to_string()).as_text(), Some("PTO"));

        let date = Date::from(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(Value::Date(date).as_text(), None);
    }
}
