//! Core domain concepts shared across all subdomains.
//!
//! - [`ids::ReviewId`] / [`ids::BusinessId`] — identifiers
//! - [`rating::Rating`] — a validated 1–5 star rating
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod ids;
pub mod rating;
pub mod string;
