//! Configuration module for WebSearch-RS
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are passed explicitly to the factory; there is no process-wide
//! configuration state.

mod settings;

pub use settings::*;
