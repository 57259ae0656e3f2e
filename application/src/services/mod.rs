//! Application services shared by several use cases

pub mod rate_limiter;

pub use rate_limiter::{RateLimitExceeded, RateLimiter};
