//! Query months for a forward-looking schedule window.

use chrono::{Datelike, Days, NaiveDate};
use shiftcal_core::error::CoreError;

use crate::error::ServiceResult;

/// First day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// ## Summary
/// Returns the first day of every month touched by
/// `today ..= today + horizon_days`, ascending and without duplicates.
///
/// ## Errors
/// Returns `CoreError::InvalidInput` for a negative horizon or one that
/// leaves the supported date range.
pub fn query_months(today: NaiveDate, horizon_days: i64) -> ServiceResult<Vec<NaiveDate>> {
    let horizon = u64::try_from(horizon_days)
        .map_err(|_e| CoreError::InvalidInput(format!("negative horizon: {horizon_days} days")))?;
    let last = today.checked_add_days(Days::new(horizon)).ok_or_else(|| {
        CoreError::InvalidInput(format!("horizon of {horizon_days} days is out of range"))
    })?;

    let last_month = first_of_month(last);
    let mut months = vec![first_of_month(today)];
    while let Some(next) = months
        .last()
        .and_then(|month| month.checked_add_months(chrono::Months::new(1)))
        .filter(|next| *next <= last_month)
    {
        months.push(next);
    }

    Ok(months)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn window_inside_one_month() {
        assert_eq!(query_months(ymd(2024, 5, 1), 20).unwrap(), vec![ymd(2024, 5, 1)]);
    }

    #[test]
    fn window_spanning_two_months() {
        assert_eq!(
            query_months(ymd(2024, 5, 18), 30).unwrap(),
            vec![ymd(2024, 5, 1), ymd(2024, 6, 1)]
        );
    }

    #[test]
    fn window_crossing_the_year() {
        assert_eq!(
            query_months(ymd(2024, 12, 20), 45).unwrap(),
            vec![ymd(2024, 12, 1), ymd(2025, 1, 1), ymd(2025, 2, 1)]
        );
    }

    #[test]
    fn zero_horizon_is_current_month() {
        assert_eq!(query_months(ymd(2024, 2, 29), 0).unwrap(), vec![ymd(2024, 2, 1)]);
    }

    #[test]
    fn negative_horizon_is_rejected() {
        assert!(matches!(
            query_months(ymd(2024, 5, 18), -1),
            Err(ServiceError::CoreError(CoreError::InvalidInput(_)))
        ));
    }

    #[test]
    fn first_of_month_truncates() {
        assert_eq!(first_of_month(ymd(2024, 5, 31)), ymd(2024, 5, 1));
    }
}
