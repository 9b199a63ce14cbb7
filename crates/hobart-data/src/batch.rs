//! Sequential batch fetching with per-symbol failure isolation.

use crate::error::{DataError, Result};
use crate::limiter::RateLimiter;
use std::future::Future;

/// A per-symbol failure recorded during a batch run.
#[derive(Debug)]
pub struct BatchFailure {
    /// Symbol whose fetch failed.
    pub symbol: String,
    /// The error the fetch returned.
    pub error: DataError,
}

/// Outcome of a batch run: the successful items in input order plus the
/// failures that were skipped.
#[derive(Debug)]
pub struct BatchReport<T> {
    /// Successfully fetched items, in the input order of their symbols.
    pub items: Vec<T>,
    /// Symbols that failed, with their errors.
    pub failures: Vec<BatchFailure>,
}

impl<T> BatchReport<T> {
    /// An empty report.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Number of symbols attempted.
    pub fn attempted(&self) -> usize {
        self.items.len() + self.failures.len()
    }
}

impl<T> Default for BatchReport<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch one record per symbol, in input order.
///
/// Each symbol's result is a typed `Result`: successes accumulate into
/// [`BatchReport::items`], failures are logged with the symbol and recorded
/// in [`BatchReport::failures`], and the batch always runs to completion. A
/// batch where every symbol fails yields an empty `items`, not an error.
///
/// The limiter is awaited before every attempt, success or failure, so each
/// request's start is stamped and consecutive upstream requests stay at least
/// the limiter's delay apart regardless of outcomes.
pub async fn fetch_batch<T, F, Fut>(
    symbols: &[String],
    limiter: &RateLimiter,
    mut fetch_one: F,
) -> BatchReport<T>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut report = BatchReport::new();

    for symbol in symbols {
        limiter.wait().await;
        match fetch_one(symbol.clone()).await {
            Ok(item) => report.items.push(item),
            Err(error) => {
                eprintln!("Warning: failed to fetch {}: {}", symbol, error);
                report.failures.push(BatchFailure {
                    symbol: symbol.clone(),
                    error,
                });
            }
        }
    }

    report
}
