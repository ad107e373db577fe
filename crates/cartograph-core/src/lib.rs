//! cartograph-core
//!
//! Pure domain types, prompt templates, the explanation formatter, and
//! output file naming conventions. No network or PDF dependency; this is
//! the shared vocabulary of the Cartograph system.

pub mod error;
pub mod format;
pub mod models;
pub mod output_names;
pub mod prompts;
