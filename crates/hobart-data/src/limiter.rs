//! Fixed-window request throttling.

use tokio::sync::Mutex;
use tokio::time::{Duration, Instant, sleep};

/// Enforces a minimum delay between consecutive requests.
///
/// This replaces the in-loop sleeps a naive fetch loop would carry: the
/// limiter is injected into [`crate::batch::fetch_batch`] and awaited before
/// each symbol's fetch, so the throttling policy lives in one place and the
/// stamp marks every request's start. It is not an
/// adaptive backoff — the delay is the same whether the previous request
/// succeeded or failed. The interior mutex also makes the limiter safe to
/// share across concurrent fetchers, which then serialize on it.
#[derive(Debug)]
pub struct RateLimiter {
    min_delay: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Create a limiter with the given minimum delay between requests.
    pub const fn new(min_delay: Duration) -> Self {
        Self {
            min_delay,
            last_request: Mutex::const_new(None),
        }
    }

    /// The configured minimum delay.
    pub const fn min_delay(&self) -> Duration {
        self.min_delay
    }

    /// Wait until at least `min_delay` has passed since the previous request.
    ///
    /// The first call returns immediately.
    pub async fn wait(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_delay {
                sleep(self.min_delay - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_request_is_immediate() {
        let limiter = RateLimiter::new(Duration::from_secs(1));
        let start = Instant::now();
        limiter.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subsequent_requests_are_delayed() {
        let limiter = RateLimiter::new(Duration::from_millis(500));
        limiter.wait().await;

        let start = Instant::now();
        limiter.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_never_sleeps() {
        let limiter = RateLimiter::new(Duration::ZERO);
        let start = Instant::now();
        limiter.wait().await;
        limiter.wait().await;
        limiter.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
