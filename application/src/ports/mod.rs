//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod business_settings;
pub mod llm_gateway;
pub mod progress;
pub mod rate_limiter_store;
pub mod review_repository;
