//! Review subdomain.
//!
//! - [`entities::Review`] — a customer review and its reply lifecycle
//! - [`input::ReviewInput`] — caller payload validated into a `Review`
//! - [`value_objects`] — generation and batch outcomes

pub mod entities;
pub mod input;
pub mod value_objects;
