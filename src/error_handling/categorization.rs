//! Error categorization.

use super::types::TransportErrorKind;

/// Categorizes a `reqwest::Error` into a `TransportErrorKind`.
///
/// Status-code errors never reach this point because redirects are disabled
/// and responses are not turned into errors; only connection-level failures
/// are categorized.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_builder() {
        TransportErrorKind::HttpRequestBuilderError
    } else if error.is_redirect() {
        TransportErrorKind::HttpRequestRedirectError
    } else if error.is_timeout() {
        TransportErrorKind::HttpRequestTimeoutError
    } else if error.is_connect() {
        TransportErrorKind::HttpRequestConnectError
    } else if error.is_request() {
        TransportErrorKind::HttpRequestRequestError
    } else if error.is_body() {
        TransportErrorKind::HttpRequestBodyError
    } else if error.is_decode() {
        TransportErrorKind::HttpRequestDecodeError
    } else {
        TransportErrorKind::HttpRequestOtherError
    }
}
