//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - HTTP client (redirects disabled)
//! - Request profile (shared headers and cookies)

mod client;
mod logger;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::fetch::{ReqwestTransport, RequestProfile};

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the production transport.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn init_transport() -> Result<ReqwestTransport, InitializationError> {
    Ok(ReqwestTransport::new(init_client()?))
}

/// Initializes the request profile shared by every test case of the run.
///
/// # Errors
///
/// Returns an error if a configured header value is invalid.
pub fn init_profile(config: &Config) -> Result<RequestProfile, InitializationError> {
    RequestProfile::from_config(config)
}
