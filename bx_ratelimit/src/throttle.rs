use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::RateLimitError;
use crate::error::Result;
use crate::limiter::RateLimiter;

/// Fixed-interval throttle behaving as a token bucket of size one
///
/// A token becomes available every `interval`. Tokens are not queued: a
/// caller arriving after a long idle period gets exactly one token
/// immediately and the next one a full interval later. Waiters contend for
/// the single slot; the order in which they are served is not specified.
#[derive(Debug)]
pub struct Throttle {
    /// Instant at which the next token is released (`None` until first use)
    next_token: Mutex<Option<Instant>>,

    /// Spacing between two consecutive tokens
    interval: Duration,
}

impl Throttle {
    /// Create a throttle releasing one token per `interval`
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(RateLimitError::InvalidConfig("interval must be greater than 0"));
        }

        Ok(Self { next_token: Mutex::new(None), interval })
    }

    /// Create a throttle allowing at most `max_requests` tokens per second
    ///
    /// The interval is `1s / max_requests` at nanosecond resolution, so rates
    /// above one billion per second are rejected along with zero.
    pub fn per_second(max_requests: u32) -> Result<Self> {
        if max_requests == 0 {
            return Err(RateLimitError::InvalidConfig("requests per second must be greater than 0"));
        }

        Self::new(Duration::from_secs(1) / max_requests)
    }

    async fn wait_for_token(&self) {
        // The slot stays locked while sleeping so later callers queue behind
        // the pending release instead of computing overlapping deadlines.
        let mut next_token = self.next_token.lock().await;
        let now = Instant::now();

        let granted = match *next_token {
            Some(release_at) if release_at > now => {
                tokio::time::sleep_until(release_at).await;
                release_at
            }
            _ => now,
        };

        *next_token = Some(granted + self.interval);
    }
}

impl RateLimiter for Throttle {
    fn try_acquire(&self) -> Result<()> {
        let mut next_token = self.next_token.try_lock().map_err(|_| RateLimitError::Exceeded)?;
        let now = Instant::now();

        match *next_token {
            Some(release_at) if release_at > now => Err(RateLimitError::Exceeded),
            _ => {
                *next_token = Some(now + self.interval);
                Ok(())
            }
        }
    }

    fn acquire(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(self.wait_for_token())
    }

    fn interval(&self) -> Duration {
        self.interval
    }
}
