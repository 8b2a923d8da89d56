//! HTTP request building.
//!
//! This module provides the shared request profile: the headers and cookies
//! that every hop of every test case carries.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL, COOKIE, PRAGMA, USER_AGENT,
};

use crate::config::{
    Config, CACHE_CONTROL_VALUE, PRAGMA_VALUE, TEST_MARKER_NAME, TEST_MARKER_VALUE,
};
use crate::error_handling::InitializationError;
use crate::script::Method;

use super::HopRequest;

/// Headers and cookies applied to every request of a run.
///
/// Established once per invocation and passed into the execution engine, so
/// test cases never share mutable state.
#[derive(Debug, Clone)]
pub struct RequestProfile {
    headers: HeaderMap,
    cookies: Vec<(String, String)>,
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, InitializationError> {
    HeaderValue::from_str(value).map_err(|_| InitializationError::HeaderValueError {
        name: name.to_string(),
        value: value.to_string(),
    })
}

impl RequestProfile {
    /// Builds the profile for a run.
    ///
    /// Always sends the User-Agent and the cache-busting `Cache-Control` and
    /// `Pragma` headers; `X-Test` header and cookie are added when enabled.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HeaderValueError` if the User-Agent is
    /// not a valid header value.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("User-Agent", &config.user_agent)?);
        if config.send_test_header {
            headers.insert(
                HeaderName::from_static("x-test"),
                HeaderValue::from_static(TEST_MARKER_VALUE),
            );
        }

        let mut cookies = Vec::new();
        if config.send_test_cookie {
            cookies.push((TEST_MARKER_NAME.to_string(), TEST_MARKER_VALUE.to_string()));
        }

        Ok(Self { headers, cookies })
    }

    /// Headers configured for the run, without the cache-busting headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Cookies configured for the run.
    pub fn cookies(&self) -> &[(String, String)] {
        &self.cookies
    }

    /// Builds one hop's request: configured headers, cookies and the
    /// cache-busting headers merged into a single header map.
    pub fn request(&self, method: Method, uri: &str) -> HopRequest {
        let mut headers = self.headers.clone();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_VALUE));
        headers.insert(PRAGMA, HeaderValue::from_static(PRAGMA_VALUE));

        if !self.cookies.is_empty() {
            let cookie = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; ");
            // Cookie names and values come from constants and are always valid
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                headers.insert(COOKIE, value);
            }
        }

        HopRequest {
            method,
            uri: uri.to_string(),
            headers,
        }
    }
}
