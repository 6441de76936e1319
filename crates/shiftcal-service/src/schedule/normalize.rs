use std::collections::BTreeSet;

use chrono::{Days, NaiveTime};

use super::ShiftEvent;

/// ## Summary
/// Moves the end of a shift that runs past midnight onto the following day.
///
/// A shift is overnight when its end is earlier than its start, or when it
/// ends at exactly midnight of its start day and starts at any other time.
/// All-day entries (`start == end`) and already corrected shifts are
/// returned unchanged.
#[must_use]
pub fn correct_overnight(event: ShiftEvent) -> ShiftEvent {
    let (start, end) = (event.start(), event.end());
    let ends_at_midnight = end.date() == start.date()
        && end.time() == NaiveTime::MIN
        && start.time() != NaiveTime::MIN;

    if end >= start && !ends_at_midnight {
        return event;
    }

    match end.checked_add_days(Days::new(1)) {
        Some(next_day) => event.with_end(next_day),
        None => {
            tracing::warn!(%start, %end, "Overnight end out of range, keeping as is");
            event
        }
    }
}

/// ## Summary
/// Corrects overnight shifts, collapses identical events and orders the
/// result by start time, then location.
///
/// Events are equal when start, end and location all match, so the same
/// shift seen through two overlapping month grids appears once.
#[must_use]
pub fn normalize(candidates: impl IntoIterator<Item = ShiftEvent>) -> Vec<ShiftEvent> {
    candidates
        .into_iter()
        .map(correct_overnight)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
