//! Logging infrastructure — business activity trail.
//!
//! Provides [`JsonlActivityLog`], a JSONL file writer that implements
//! the [`ActivityLog`](autoreply_application::ActivityLog) port.

mod jsonl_activity_log;

pub use jsonl_activity_log::JsonlActivityLog;
