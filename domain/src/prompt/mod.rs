//! Prompt domain
//!
//! Templates for the reply and insights completions.

pub mod insights;
mod reply;

pub use insights::{InsightsPromptTemplate, ReviewWindowStats};
pub use reply::ReplyPromptTemplate;
