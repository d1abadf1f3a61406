//! # bx_ratelimit
//!
//! Request throttling for the public API client. A [`Throttle`] hands out at
//! most one token per interval and never banks unused ticks.

pub mod error;
pub mod limiter;
pub mod throttle;

pub use error::RateLimitError;
pub use error::Result;
pub use limiter::RateLimiter;
pub use throttle::Throttle;
