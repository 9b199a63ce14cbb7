//! Per-symbol performance over the standard time windows.

use crate::change::change_pct;
use crate::windows::{
    PricePoint, STANDARD_WINDOWS, close_at_or_before, first_close_at_or_after,
};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// The percentage change over one window, or a marker that the history had no
/// observation old enough to measure it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WindowChange {
    /// Measured percentage change.
    Value(f64),
    /// No historical price at or before the window cutoff.
    Unavailable,
}

impl WindowChange {
    /// The measured change, if one exists.
    pub const fn as_value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Unavailable => None,
        }
    }
}

/// Performance of a single symbol across all display windows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceRecord {
    /// Ticker symbol.
    pub symbol: String,
    /// Latest traded price.
    pub current_price: f64,
    /// `(window label, change)` pairs in display order:
    /// 1d, 3d, 5d, 15d, 1m, 2m, 3m, 6m, YTD, 1y, 2y.
    pub changes: Vec<(&'static str, WindowChange)>,
}

/// Measure a symbol's performance against its price history.
///
/// Each window is measured independently: the historical reference is the
/// most recent close at or before `today - window`, and a window with no such
/// observation yields [`WindowChange::Unavailable`] without affecting the
/// others. YTD compares against the first close at or after January 1 of the
/// current year.
pub fn measure_performance(
    symbol: impl Into<String>,
    current_price: f64,
    history: &[PricePoint],
    today: NaiveDate,
) -> PerformanceRecord {
    let mut changes = Vec::with_capacity(STANDARD_WINDOWS.len() + 1);

    for window in &STANDARD_WINDOWS {
        let cutoff = today - Duration::days(window.days);
        let change = close_at_or_before(history, cutoff)
            .map_or(WindowChange::Unavailable, |historical| {
                WindowChange::Value(change_pct(current_price, historical))
            });
        changes.push((window.label, change));

        // YTD sits between 6m and 1y in the display order.
        if window.label == "6m" {
            changes.push(("YTD", ytd_change(current_price, history, today)));
        }
    }

    PerformanceRecord {
        symbol: symbol.into(),
        current_price,
        changes,
    }
}

fn ytd_change(current_price: f64, history: &[PricePoint], today: NaiveDate) -> WindowChange {
    let jan_first = match NaiveDate::from_ymd_opt(today.year(), 1, 1) {
        Some(d) => d,
        None => return WindowChange::Unavailable,
    };
    first_close_at_or_after(history, jan_first)
        .map_or(WindowChange::Unavailable, |historical| {
            WindowChange::Value(change_pct(current_price, historical))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pp(y: i32, m: u32, d: u32, close: f64) -> PricePoint {
        PricePoint::new(date(y, m, d), close)
    }

    #[test]
    fn test_labels_follow_display_order() {
        let record = measure_performance("AAPL", 100.0, &[], date(2025, 6, 15));
        let labels: Vec<&str> = record.changes.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec!["1d", "3d", "5d", "15d", "1m", "2m", "3m", "6m", "YTD", "1y", "2y"]
        );
    }

    #[test]
    fn test_empty_history_is_all_unavailable() {
        let record = measure_performance("AAPL", 100.0, &[], date(2025, 6, 15));
        assert!(
            record
                .changes
                .iter()
                .all(|(_, c)| *c == WindowChange::Unavailable)
        );
    }

    #[test]
    fn test_windows_measured_independently() {
        // History only reaches back ~2 months: short windows measurable,
        // long windows unavailable.
        let today = date(2025, 6, 15);
        let history = vec![
            pp(2025, 4, 20, 80.0),
            pp(2025, 5, 14, 90.0),
            pp(2025, 6, 13, 95.0),
        ];
        let record = measure_performance("NVDA", 100.0, &history, today);
        let get = |label: &str| {
            record
                .changes
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, c)| *c)
                .unwrap()
        };

        match get("1d") {
            WindowChange::Value(v) => assert_relative_eq!(v, (100.0 - 95.0) / 95.0 * 100.0),
            WindowChange::Unavailable => panic!("1d should be measurable"),
        }
        match get("1m") {
            WindowChange::Value(v) => assert_relative_eq!(v, (100.0 - 90.0) / 90.0 * 100.0),
            WindowChange::Unavailable => panic!("1m should be measurable"),
        }
        assert_eq!(get("6m"), WindowChange::Unavailable);
        assert_eq!(get("2y"), WindowChange::Unavailable);
    }

    #[test]
    fn test_ytd_uses_first_close_of_year() {
        let today = date(2025, 6, 15);
        let history = vec![
            pp(2024, 12, 30, 50.0),
            pp(2025, 1, 2, 80.0),
            pp(2025, 3, 1, 90.0),
        ];
        let record = measure_performance("MSFT", 100.0, &history, today);
        let ytd = record
            .changes
            .iter()
            .find(|(l, _)| *l == "YTD")
            .map(|(_, c)| *c)
            .unwrap();
        // Anchored at the Jan 2 close, not the December one.
        assert_eq!(ytd, WindowChange::Value(25.0));
    }
}
