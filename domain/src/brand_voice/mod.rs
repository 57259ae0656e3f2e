//! Brand voice subdomain: how a business wants its replies to sound.

pub mod entities;
pub mod resolver;
