//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default User-Agent, cache-busting headers, grammar markers)
//! - CLI option types and parsing
//! - The library-level `Config` handed to the run driver

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
