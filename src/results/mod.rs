//! Result types for search tool responses
//!
//! Defines the common result model every provider parses into.

mod types;

pub use types::*;
