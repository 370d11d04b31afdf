//! Time-window filtering relative to an injected reference instant.

use brewlog_common::{CoffeeEntry, TimeWindow};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Concrete bounds of a [`TimeWindow`] at a given reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum WindowBounds {
    /// Every date passes.
    Unbounded,
    /// Dates within a calendar month, both ends inclusive.
    Month {
        /// First day of the month.
        first: NaiveDate,
        /// Last day of the month.
        last: NaiveDate,
    },
    /// Dates whose start of day is at or after `since`. No upper bound, so
    /// future-dated entries pass.
    Since {
        /// Earliest instant an entry may start at.
        since: NaiveDateTime,
    },
}

impl WindowBounds {
    /// Resolves a window against a reference instant.
    ///
    /// Month subtraction clamps to the last day of a shorter month, so
    /// three months before May 31 is the end of February. A subtraction
    /// that falls outside the representable calendar yields `Unbounded`.
    #[must_use]
    pub fn resolve(window: TimeWindow, reference: NaiveDateTime) -> Self {
        match window {
            TimeWindow::All => Self::Unbounded,
            TimeWindow::CurrentMonth => month_containing(reference.date()),
            TimeWindow::Last3Months | TimeWindow::Last6Months => window
                .months_back()
                .and_then(|months| reference.checked_sub_months(Months::new(months)))
                .map_or(Self::Unbounded, |since| Self::Since { since }),
        }
    }

    /// Whether an entry dated `date` falls inside these bounds.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Unbounded => true,
            Self::Month { first, last } => first <= date && date <= last,
            Self::Since { since } => date.and_time(NaiveTime::MIN) >= since,
        }
    }
}

fn month_containing(date: NaiveDate) -> WindowBounds {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1);
    let last = first
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);

    match first {
        Some(first) => WindowBounds::Month { first, last },
        None => WindowBounds::Unbounded,
    }
}

/// Keeps the entries that fall inside `window`, preserving input order.
///
/// `TimeWindow::All` returns every entry. The input is never modified.
pub fn filter_by_window<'a, I>(
    entries: I,
    window: TimeWindow,
    reference: NaiveDateTime,
) -> Vec<&'a CoffeeEntry>
where
    I: IntoIterator<Item = &'a CoffeeEntry>,
{
    let bounds = WindowBounds::resolve(window, reference);
    let filtered: Vec<&CoffeeEntry> = entries
        .into_iter()
        .filter(|entry| bounds.contains(entry.date))
        .collect();

    tracing::debug!(
        window = %window,
        ?bounds,
        kept = filtered.len(),
        "filtered entries by time window"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewlog_common::test_utils::{date, datetime, entry};

    #[test]
    fn test_all_is_identity() {
        let entries = vec![entry("b", 3, "2020-01-01"), entry("a", 4, "2030-01-01")];
        let kept = filter_by_window(&entries, TimeWindow::All, datetime(2024, 3, 15, 0, 0, 0));
        let ids: Vec<_> = kept.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_current_month_is_inclusive_on_both_ends() {
        let entries = vec![
            entry("first", 3, "2024-03-01"),
            entry("before", 3, "2024-02-28"),
            entry("last", 3, "2024-03-31"),
            entry("after", 3, "2024-04-01"),
        ];
        let kept = filter_by_window(&entries, TimeWindow::CurrentMonth, datetime(2024, 3, 15, 9, 30, 0));
        let ids: Vec<_> = kept.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "last"]);
    }

    #[test]
    fn test_current_month_handles_december_and_leap_february() {
        assert_eq!(
            WindowBounds::resolve(TimeWindow::CurrentMonth, datetime(2024, 12, 10, 0, 0, 0)),
            WindowBounds::Month { first: date(2024, 12, 1), last: date(2024, 12, 31) }
        );
        assert_eq!(
            WindowBounds::resolve(TimeWindow::CurrentMonth, datetime(2024, 2, 10, 0, 0, 0)),
            WindowBounds::Month { first: date(2024, 2, 1), last: date(2024, 2, 29) }
        );
    }

    #[test]
    fn test_rolling_window_compares_start_of_day_against_reference_time() {
        let reference = datetime(2024, 6, 15, 12, 0, 0);
        let entries = vec![
            entry("same-day", 3, "2024-03-15"),
            entry("next-day", 3, "2024-03-16"),
            entry("future", 3, "2025-01-01"),
        ];
        let kept = filter_by_window(&entries, TimeWindow::Last3Months, reference);
        let ids: Vec<_> = kept.iter().map(|e| e.id.as_str()).collect();

        // 2024-03-15T00:00 is earlier than 2024-03-15T12:00.
        assert_eq!(ids, vec!["next-day", "future"]);
    }

    #[test]
    fn test_rolling_window_at_midnight_includes_boundary_day() {
        let kept_len = filter_by_window(
            &[entry("x", 3, "2023-12-15")],
            TimeWindow::Last6Months,
            datetime(2024, 6, 15, 0, 0, 0),
        )
        .len();
        assert_eq!(kept_len, 1);
    }

    #[test]
    fn test_month_subtraction_clamps_to_shorter_month() {
        assert_eq!(
            WindowBounds::resolve(TimeWindow::Last3Months, datetime(2024, 5, 31, 0, 0, 0)),
            WindowBounds::Since { since: datetime(2024, 2, 29, 0, 0, 0) }
        );
        assert_eq!(
            WindowBounds::resolve(TimeWindow::Last6Months, datetime(2023, 8, 31, 8, 0, 0)),
            WindowBounds::Since { since: datetime(2023, 2, 28, 8, 0, 0) }
        );
    }

    #[test]
    fn test_future_entries_outside_current_month_are_excluded() {
        let entries = vec![entry("future", 3, "2024-05-02")];
        let reference = datetime(2024, 3, 15, 0, 0, 0);
        assert!(filter_by_window(&entries, TimeWindow::CurrentMonth, reference).is_empty());
        assert_eq!(filter_by_window(&entries, TimeWindow::Last3Months, reference).len(), 1);
    }
}
