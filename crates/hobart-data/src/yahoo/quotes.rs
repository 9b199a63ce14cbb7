//! Quote data fetching from Yahoo Finance.

use crate::error::{DataError, Result};
use chrono::{DateTime, Utc};
use hobart_metrics::PricePoint;
use yahoo_finance_api as yahoo;

/// Yahoo Finance quote provider.
///
/// Request pacing is handled by the rate limiter the batch fetcher carries,
/// not by the provider itself.
pub struct YahooQuoteProvider {
    provider: yahoo::YahooConnector,
}

impl std::fmt::Debug for YahooQuoteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooQuoteProvider").finish_non_exhaustive()
    }
}

impl YahooQuoteProvider {
    /// Create a new Yahoo Finance quote provider.
    pub fn new() -> Self {
        Self {
            provider: yahoo::YahooConnector::new().expect("Failed to create Yahoo connector"),
        }
    }

    /// Fetch the latest traded price for a symbol.
    ///
    /// Falls back to the most recent close of the past few days when the
    /// latest-quote endpoint has nothing, before reporting the price as
    /// missing.
    pub async fn latest_price(&self, symbol: &str) -> Result<f64> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let latest = self
            .provider
            .get_latest_quotes(symbol, "1d")
            .await
            .and_then(|response| response.last_quote());

        match latest {
            Ok(quote) => Ok(quote.close),
            Err(_) => self.last_close_fallback(symbol).await,
        }
    }

    async fn last_close_fallback(&self, symbol: &str) -> Result<f64> {
        let end = Utc::now();
        let start = end - chrono::Duration::days(5);
        let history = self.price_history(symbol, start, end).await?;
        history
            .last()
            .map(|point| point.close)
            .ok_or_else(|| DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "No current price available".to_string(),
            })
    }

    /// Fetch daily closing prices for a single symbol.
    ///
    /// # Arguments
    /// * `symbol` - The ticker symbol (e.g., "AAPL")
    /// * `start` - Start date for the data
    /// * `end` - End date for the data
    ///
    /// # Returns
    /// Date-ascending `(date, close)` points for the requested range.
    pub async fn price_history(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>> {
        // Validate date range
        if start > end {
            return Err(DataError::InvalidDateRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }

        // Validate symbol
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        // Convert chrono DateTime to time::OffsetDateTime
        let start_time = time::OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;
        let end_time = time::OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;

        // Fetch data from Yahoo Finance
        let response = self
            .provider
            .get_quote_history(symbol, start_time, end_time)
            .await?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::YahooApi(e.to_string()))?;

        if quotes.is_empty() {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "No data returned from Yahoo Finance".to_string(),
            });
        }

        quotes
            .iter()
            .map(|quote| {
                let date = DateTime::from_timestamp(quote.timestamp as i64, 0)
                    .ok_or_else(|| {
                        DataError::TimeConversion(format!(
                            "Invalid quote timestamp: {}",
                            quote.timestamp
                        ))
                    })?
                    .date_naive();
                Ok(PricePoint::new(date, quote.close))
            })
            .collect()
    }
}

impl Default for YahooQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    #[tokio::test]
    async fn test_invalid_date_range() {
        let provider = YahooQuoteProvider::new();
        let start = Utc::now();
        let end = start - ChronoDuration::days(30);

        let result = provider.price_history("AAPL", start, end).await;
        assert!(matches!(result, Err(DataError::InvalidDateRange { .. })));
    }

    #[tokio::test]
    async fn test_invalid_symbol() {
        let provider = YahooQuoteProvider::new();
        let end = Utc::now();
        let start = end - ChronoDuration::days(30);

        let result = provider.price_history("", start, end).await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));

        let result = provider.latest_price("").await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }
}
