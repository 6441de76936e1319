use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::ScheduleError;

/// ## Summary
/// Parses a 12-hour clock token (`9AM`, `9:30pm`, `12:00AM`) and places it on
/// `date`.
///
/// ## Errors
/// Returns `ScheduleError::InvalidTimeFormat` if the token is not
/// `H[:MM]AM` or `H[:MM]PM`.
pub fn parse_time(date: NaiveDate, token: &str) -> Result<NaiveDateTime, ScheduleError> {
    let invalid = || ScheduleError::InvalidTimeFormat(token.to_string());

    let token = token.trim();
    if !token.is_ascii() || token.len() < 3 {
        return Err(invalid());
    }

    let (clock, meridiem) = token.split_at(token.len() - 2);
    let is_pm = if meridiem.eq_ignore_ascii_case("pm") {
        true
    } else if meridiem.eq_ignore_ascii_case("am") {
        false
    } else {
        return Err(invalid());
    };

    let (hour_text, minute_text) = match clock.split_once(':') {
        Some((hour, minute)) => (hour, Some(minute)),
        None => (clock, None),
    };

    let hour = parse_number(hour_text, 1..=2)
        .filter(|hour| (1..=12).contains(hour))
        .ok_or_else(invalid)?;
    let minute = match minute_text {
        Some(text) => parse_number(text, 2..=2)
            .filter(|minute| *minute < 60)
            .ok_or_else(invalid)?,
        None => 0,
    };

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (hour, false) => hour,
        (hour, true) => hour + 12,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(|time| date.and_time(time))
        .ok_or_else(invalid)
}

fn parse_number(text: &str, digits: RangeInclusive<usize>) -> Option<u32> {
    if !digits.contains(&text.len()) || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
