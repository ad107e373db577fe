//! cartograph-llm
//!
//! Language model invocation: the `ModelClient` capability, an HTTP client
//! for a locally served model, and the prompt-driven operations built on it.

pub mod client;
pub mod error;
pub mod transaction;
