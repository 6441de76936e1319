use chrono::{Datelike, Month, NaiveDate};

use super::{CalendarCell, MonthCursor, ScheduleError};

/// Semantic kind of a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// Paid time off.
    Off,
    /// Layout-only day of an adjacent month.
    NonMonth,
    /// Day with a scheduled shift.
    Scheduled,
    /// Nothing to extract.
    Empty,
}

/// Result of classifying one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: DayKind,
    /// Resolved calendar date; `None` for cells that carry no usable date.
    pub date: Option<NaiveDate>,
}

impl Classification {
    const fn skipped() -> Self {
        Self {
            kind: DayKind::Empty,
            date: None,
        }
    }
}

/// ## Summary
/// Classifies a cell and resolves its calendar date, updating `cursor`.
///
/// Cells must be fed in document order: a labelled month (`"May 31"`)
/// establishes the cursor, a bare `"1"` after it advances to the next month,
/// and bare days before any labelled month are skipped. Non-month cells take
/// the queried month. `today` resolves the cell marked as the current day.
///
/// ## Errors
/// Returns `ScheduleError::InvalidDayLabel` if the label is neither a day
/// number nor `<month name> <day>`, or names a day the month does not have.
pub fn classify(
    cell: &CalendarCell,
    cursor: &mut MonthCursor,
    today: NaiveDate,
) -> Result<Classification, ScheduleError> {
    let Some(label) = cell.label() else {
        return Ok(Classification::skipped());
    };
    let invalid = || ScheduleError::InvalidDayLabel(label.to_string());

    let (mut year, mut month, day) = if cell.markers.today {
        cursor.set(today.year(), today.month());
        (today.year(), today.month(), today.day())
    } else if let Some((month_name, day_text)) = label.split_once(char::is_whitespace) {
        let month = month_name.parse::<Month>().map_err(|_e| invalid())?;
        let day = parse_day(day_text.trim()).ok_or_else(invalid)?;
        let (year, month) = cursor.establish(month);
        (year, month, day)
    } else {
        let day = parse_day(label).ok_or_else(invalid)?;
        let resolved = if day == 1 {
            cursor.advance()
        } else {
            cursor.current()
        };
        let Some((year, month)) = resolved else {
            tracing::trace!(label, "No month established yet, skipping cell");
            return Ok(Classification::skipped());
        };
        (year, month, day)
    };

    if cell.markers.non_month {
        year = cursor.query().year();
        month = cursor.query().month();
    }

    let kind = if cell.markers.non_month {
        DayKind::NonMonth
    } else if cell.markers.off {
        DayKind::Off
    } else if cell.markers.has_shift {
        DayKind::Scheduled
    } else {
        DayKind::Empty
    };

    let date = NaiveDate::from_ymd_opt(year, month, day);
    if date.is_none() && kind != DayKind::NonMonth {
        return Err(invalid());
    }

    Ok(Classification { kind, date })
}

fn parse_day(text: &str) -> Option<u32> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok().filter(|day| (1..=31).contains(day))
}
