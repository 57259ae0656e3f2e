//! Insights/digest subdomain.
//!
//! - [`entities::InsightsBundle`] — the validated analysis shape
//! - [`rules`] — declarative field rules (kind, constraint, default)
//! - [`validator::InsightsValidator`] — applies the rule tables to untrusted JSON
//! - [`parsing::parse_insights_response`] — completion text -> bundle
//! - [`period::ReportingPeriod`] — the window a digest covers

pub mod entities;
pub mod parsing;
pub mod period;
pub mod rules;
pub mod validator;
