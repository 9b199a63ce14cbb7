//! Time windows and price-history lookups.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date of the observation.
    pub date: NaiveDate,
    /// Closing price on that date.
    pub close: f64,
}

impl PricePoint {
    /// Create a new price point.
    pub const fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// A named lookback window measured in calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Column label, e.g. `"1d"` or `"6m"`.
    pub label: &'static str,
    /// Window length in calendar days.
    pub days: i64,
}

impl TimeWindow {
    /// Create a new time window.
    pub const fn new(label: &'static str, days: i64) -> Self {
        Self { label, days }
    }
}

/// The standard lookback windows, in display order.
///
/// Year-to-date is not listed here: it is anchored to January 1 rather than a
/// fixed day count and is handled separately by the performance builder.
pub const STANDARD_WINDOWS: [TimeWindow; 10] = [
    TimeWindow::new("1d", 1),
    TimeWindow::new("3d", 3),
    TimeWindow::new("5d", 5),
    TimeWindow::new("15d", 15),
    TimeWindow::new("1m", 30),
    TimeWindow::new("2m", 60),
    TimeWindow::new("3m", 90),
    TimeWindow::new("6m", 180),
    TimeWindow::new("1y", 365),
    TimeWindow::new("2y", 730),
];

/// The most recent close at or before `cutoff`.
///
/// `history` must be sorted by date ascending, which is how providers return
/// it. Returns `None` when every observation is after the cutoff.
pub fn close_at_or_before(history: &[PricePoint], cutoff: NaiveDate) -> Option<f64> {
    history
        .iter()
        .rev()
        .find(|p| p.date <= cutoff)
        .map(|p| p.close)
}

/// The earliest close at or after `cutoff`.
///
/// Used for year-to-date, which anchors on the first trading day of the year.
pub fn first_close_at_or_after(history: &[PricePoint], cutoff: NaiveDate) -> Option<f64> {
    history.iter().find(|p| p.date >= cutoff).map(|p| p.close)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn history() -> Vec<PricePoint> {
        vec![
            PricePoint::new(day(2), 100.0),
            PricePoint::new(day(4), 102.0),
            PricePoint::new(day(9), 105.0),
        ]
    }

    #[test]
    fn test_close_at_or_before_picks_most_recent() {
        let hist = history();
        // Exact hit
        assert_eq!(close_at_or_before(&hist, day(4)), Some(102.0));
        // Gap: falls back to the nearest earlier observation
        assert_eq!(close_at_or_before(&hist, day(7)), Some(102.0));
        assert_eq!(close_at_or_before(&hist, day(30)), Some(105.0));
    }

    #[test]
    fn test_close_at_or_before_empty_window() {
        let hist = history();
        assert_eq!(close_at_or_before(&hist, day(1)), None);
        assert_eq!(close_at_or_before(&[], day(9)), None);
    }

    #[test]
    fn test_first_close_at_or_after() {
        let hist = history();
        assert_eq!(first_close_at_or_after(&hist, day(1)), Some(100.0));
        assert_eq!(first_close_at_or_after(&hist, day(3)), Some(102.0));
        assert_eq!(first_close_at_or_after(&hist, day(10)), None);
    }

    #[test]
    fn test_standard_windows_order() {
        let labels: Vec<&str> = STANDARD_WINDOWS.iter().map(|w| w.label).collect();
        assert_eq!(
            labels,
            vec!["1d", "3d", "5d", "15d", "1m", "2m", "3m", "6m", "1y", "2y"]
        );
    }
}
