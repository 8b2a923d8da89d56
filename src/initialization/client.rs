//! HTTP client initialization.
//!
//! This module provides the function to initialize the HTTP client used for
//! every hop of every test case.

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client with redirects disabled.
///
/// The execution engine follows redirects itself, one expected response at a
/// time, so the client must hand back every 3xx response untouched. No
/// request timeout is set beyond reqwest's defaults.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(client)
}
