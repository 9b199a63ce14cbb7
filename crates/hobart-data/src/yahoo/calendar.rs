//! Earnings calendar fetching from Yahoo Finance.

use crate::error::{DataError, Result};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const QUOTE_SUMMARY_URL: &str = "https://query2.finance.yahoo.com/v10/finance/quoteSummary";

/// A company's next scheduled earnings report.
///
/// Symbols without a scheduled date are never represented as records with a
/// null date; the fetch fails with [`DataError::MissingData`] instead and the
/// batch fetcher drops the symbol with a log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsRecord {
    /// Ticker symbol.
    pub symbol: String,
    /// Date the company is expected to report.
    pub earnings_date: NaiveDate,
}

/// Yahoo Finance earnings calendar provider.
#[derive(Debug)]
pub struct YahooCalendarProvider {
    client: reqwest::Client,
}

impl YahooCalendarProvider {
    /// Create a new earnings calendar provider.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)")
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Fetch the next earnings date for a symbol.
    pub async fn next_earnings(&self, symbol: &str) -> Result<EarningsRecord> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let url = format!("{QUOTE_SUMMARY_URL}/{symbol}?modules=calendarEvents");
        let envelope: QuoteSummaryEnvelope = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_earnings(symbol, &envelope)
    }
}

impl Default for YahooCalendarProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the next earnings date from a quoteSummary payload.
///
/// Yahoo sometimes publishes a date *range* (several candidate report days);
/// the first entry is taken as canonical.
fn parse_earnings(symbol: &str, envelope: &QuoteSummaryEnvelope) -> Result<EarningsRecord> {
    let timestamp = envelope
        .quote_summary
        .result
        .as_deref()
        .unwrap_or_default()
        .first()
        .and_then(|r| r.calendar_events.as_ref())
        .and_then(|c| c.earnings.as_ref())
        .and_then(|e| e.earnings_date.first())
        .map(|d| d.raw)
        .ok_or_else(|| DataError::MissingData {
            symbol: symbol.to_string(),
            reason: "No upcoming earnings date in calendar".to_string(),
        })?;

    let earnings_date = DateTime::from_timestamp(timestamp, 0)
        .ok_or_else(|| {
            DataError::TimeConversion(format!("Invalid earnings timestamp: {timestamp}"))
        })?
        .date_naive();

    Ok(EarningsRecord {
        symbol: symbol.to_string(),
        earnings_date,
    })
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryBody,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryBody {
    result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    #[serde(rename = "calendarEvents")]
    calendar_events: Option<CalendarEvents>,
}

#[derive(Debug, Deserialize)]
struct CalendarEvents {
    earnings: Option<EarningsEvents>,
}

#[derive(Debug, Deserialize)]
struct EarningsEvents {
    #[serde(rename = "earningsDate", default)]
    earnings_date: Vec<RawTimestamp>,
}

#[derive(Debug, Deserialize)]
struct RawTimestamp {
    raw: i64,
}
