use chrono::{Datelike, Month, NaiveDate};

/// Month state carried through the scan of one rendered grid.
///
/// Bare day numbers (`"3"`) take their month from the cursor. The cursor is
/// established by labels that name a month (`"May 31"`) and advanced when a
/// bare `"1"` follows days of the previous month. A fresh cursor is created
/// for every grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    query: NaiveDate,
    current: Option<(i32, u32)>,
}

impl MonthCursor {
    /// Creates a cursor for the grid requested with `query`.
    #[must_use]
    pub const fn new(query: NaiveDate) -> Self {
        Self {
            query,
            current: None,
        }
    }

    /// The date the grid was requested for.
    #[must_use]
    pub const fn query(&self) -> NaiveDate {
        self.query
    }

    /// Currently inferred `(year, month)`, if any label established one.
    #[must_use]
    pub const fn current(&self) -> Option<(i32, u32)> {
        self.current
    }

    /// ## Summary
    /// Establishes `month` as the current month.
    ///
    /// Labels carry no year, so the year is the one that puts `month` closest
    /// to the queried month (a January grid may open with `"Dec 29"`).
    pub fn establish(&mut self, month: Month) -> (i32, u32) {
        let month = month.number_from_month();
        let query_index = month_index(self.query.year(), self.query.month());
        let year = [self.query.year() - 1, self.query.year(), self.query.year() + 1]
            .into_iter()
            .min_by_key(|year| (month_index(*year, month) - query_index).abs())
            .unwrap_or(self.query.year());

        self.current = Some((year, month));
        (year, month)
    }

    /// Sets the current month directly.
    pub const fn set(&mut self, year: i32, month: u32) {
        self.current = Some((year, month));
    }

    /// ## Summary
    /// Moves to the following month, wrapping December into January of the
    /// next year. Does nothing while no month is established.
    pub fn advance(&mut self) -> Option<(i32, u32)> {
        let (year, month) = self.current?;
        let next = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        self.current = Some(next);
        Some(next)
    }
}

fn month_index(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    #[test]
    fn new_cursor_has_no_month() {
        let cursor = MonthCursor::new(query(2024, 5));
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.query(), query(2024, 5));
    }

    #[test]
    fn establish_uses_query_year() {
        let mut cursor = MonthCursor::new(query(2024, 5));
        assert_eq!(cursor.establish(Month::April), (2024, 4));
        assert_eq!(cursor.establish(Month::June), (2024, 6));
    }

    #[test]
    fn establish_crosses_year_boundaries() {
        let mut cursor = MonthCursor::new(query(2025, 1));
        assert_eq!(cursor.establish(Month::December), (2024, 12));

        let mut cursor = MonthCursor::new(query(2024, 12));
        assert_eq!(cursor.establish(Month::January), (2025, 1));
    }

    #[test]
    fn advance_wraps_december() {
        let mut cursor = MonthCursor::new(query(2024, 12));
        cursor.establish(Month::December);
        assert_eq!(cursor.advance(), Some((2025, 1)));
        assert_eq!(cursor.advance(), Some((2025, 2)));
    }

    #[test]
    fn advance_without_month_is_noop() {
        let mut cursor = MonthCursor::new(query(2024, 5));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.current(), None);
    }
}
