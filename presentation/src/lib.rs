//! Presentation layer for review-autoreply
//!
//! This crate contains CLI definitions, output formatters,
//! and batch progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, DigestArgs, ReplyArgs};
pub use output::console::{ConsoleFormatter, JsonFormatter};
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
