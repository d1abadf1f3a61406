use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::error::Result;

/// Gate placed in front of every outbound request.
///
/// Implementations must be shareable between tasks: a single limiter bounds
/// the request rate of every caller holding a reference to it.
pub trait RateLimiter: Send + Sync {
    /// Take a token if one is available right now, without waiting
    fn try_acquire(&self) -> Result<()>;

    /// Wait until a token becomes available, then take it
    fn acquire(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;

    /// Minimum spacing between two granted tokens
    fn interval(&self) -> Duration;
}
