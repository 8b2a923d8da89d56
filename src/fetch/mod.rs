//! HTTP transport seam.
//!
//! This module handles:
//! - The `Transport` trait the execution engine issues hops through
//! - The request/response values exchanged across it
//! - The reqwest-backed production transport
//! - Shared request headers/cookies and redirect target resolution

mod redirects;
mod request;
mod transport;

use reqwest::header::{HeaderMap, LOCATION};

use crate::error_handling::TransportError;
use crate::script::Method;

// Re-export public API
pub use redirects::resolve_location;
pub use request::RequestProfile;
pub use transport::ReqwestTransport;

/// One hop's request, fully assembled.
#[derive(Debug, Clone)]
pub struct HopRequest {
    /// Request method
    pub method: Method,
    /// Absolute request target
    pub uri: String,
    /// Merged request headers (profile, cookies, cache-busting)
    pub headers: HeaderMap,
}

/// One hop's response, as seen by the comparison logic.
#[derive(Debug, Clone, Default)]
pub struct HopResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers (case-insensitive lookup)
    pub headers: HeaderMap,
    /// Response body decoded as text (empty for `HEAD`)
    pub body: String,
}

impl HopResponse {
    /// Value of a response header; repeated headers are joined with `", "`.
    pub fn header(&self, name: &str) -> Option<String> {
        let values: Vec<String> = self
            .headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }

    /// Raw `Location` header value, if any.
    pub fn location(&self) -> Option<String> {
        self.headers
            .get(LOCATION)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
    }
}

/// Issues a single request without following redirects.
///
/// Implementations must never follow redirects themselves: the execution
/// engine owns redirect traversal so every hop can be compared.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends one request and returns the complete response.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` for anything that prevents a response from
    /// being received (invalid target, DNS, connect, timeout, body read).
    async fn send(&self, request: HopRequest) -> Result<HopResponse, TransportError>;
}
