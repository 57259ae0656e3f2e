//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod auto_reply_service;
pub mod batch_generate;
pub mod generate_insights;
pub mod generate_reply;
pub mod review_workflow;
pub(crate) mod shared;
