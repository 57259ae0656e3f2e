//! OpenAI-compatible chat completions adapter
//!
//! Implements LlmGateway for any endpoint speaking the
//! `/v1/chat/completions` wire format.

pub mod gateway;
pub mod protocol;
