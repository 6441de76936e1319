use chrono::NaiveDate;

use super::{CalendarCell, DayKind, ScheduleError, ShiftEvent, parse_time};

/// ## Summary
/// Produces the candidate event for a classified cell.
///
/// Off days become an all-day PTO entry at midnight of `date`. Scheduled days
/// read the time range (`"9:00AM - 5:00PM"`: start, separator, end) and the
/// location from the cell content. Every other kind yields `None`.
///
/// The returned event is not yet corrected for shifts that end after
/// midnight; see `correct_overnight`.
///
/// ## Errors
/// - `ScheduleError::MissingElement` if a scheduled cell has no time range or
///   no location.
/// - `ScheduleError::MalformedShiftText` if the time range is not exactly
///   three whitespace separated tokens.
/// - `ScheduleError::InvalidTimeFormat` if either clock token is invalid.
pub fn extract(
    cell: &CalendarCell,
    kind: DayKind,
    date: NaiveDate,
) -> Result<Option<ShiftEvent>, ScheduleError> {
    match kind {
        DayKind::Off => Ok(Some(ShiftEvent::pto(date))),
        DayKind::Scheduled => extract_shift(cell, date).map(Some),
        DayKind::NonMonth | DayKind::Empty => Ok(None),
    }
}

fn extract_shift(cell: &CalendarCell, date: NaiveDate) -> Result<ShiftEvent, ScheduleError> {
    let time_range = cell
        .time_range()
        .ok_or(ScheduleError::MissingElement("shift time range"))?;

    let tokens: Vec<&str> = time_range.split_whitespace().collect();
    let [start, _separator, end] = tokens.as_slice() else {
        return Err(ScheduleError::MalformedShiftText(time_range.to_string()));
    };

    let start = parse_time(date, start)?;
    let end = parse_time(date, end)?;
    let location = cell
        .location()
        .ok_or(ScheduleError::MissingElement("location"))?;

    Ok(ShiftEvent::new(start, end, location))
}
