//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, candidate record names, owner table)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, Opt, OutputFormat};
