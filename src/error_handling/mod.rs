//! Error handling.
//!
//! This module provides:
//! - Error type definitions for script loading, transport, and initialization
//! - Categorization of HTTP client errors
//!
//! Errors are categorized into:
//! - **Script errors**: malformed statements; the file is not run at all
//! - **Transport errors**: the request could not be completed; the run aborts
//! - **Initialization errors**: logger or client setup failed

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{
    InitializationError, ScriptError, SyntaxError, SyntaxErrorKind, TransportError,
    TransportErrorKind,
};
