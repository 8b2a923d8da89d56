//! Error type definitions.
//!
//! This module defines the error families surfaced by the verifier: script
//! syntax errors, transport failures, and startup failures. Assertion
//! mismatches are not errors; they are reported as diff entries.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A configured request header (e.g. the User-Agent) is not a valid header value.
    #[error("Invalid value for request header {name}: {value:?}")]
    HeaderValueError {
        /// Header name
        name: String,
        /// Rejected value
        value: String,
    },
}

/// What went wrong on a script line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// The line starts with something other than `#`, `<` or `>`.
    #[error("unrecognized statement {0:?}")]
    UnknownStatement(char),

    /// A `>` line appeared before any `<` line.
    #[error("response directive without a preceding request")]
    ResponseWithoutRequest,

    /// A `<` line carried no URI.
    #[error("request directive without a URI")]
    MissingUri,

    /// The method token of a `<` line is not a supported HTTP method.
    #[error(
        "unknown HTTP method {0:?}; expected one of {accepted}",
        accepted = crate::script::Method::accepted()
    )]
    UnknownMethod(String),

    /// A header or body assertion preceded the response's status code.
    #[error(
        "no HTTP status code specified for response; this must be the first entry in the response section"
    )]
    NoStatusCode,

    /// A `>` line that is neither a body assertion nor a header is not an integer.
    #[error("invalid HTTP status code {0:?}")]
    InvalidStatus(String),

    /// A request directive was closed without any expected response.
    #[error("request has no expected response")]
    NoExpectedResponse,
}

/// A malformed script line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct SyntaxError {
    /// 1-based line number of the offending statement
    pub line: usize,
    /// What is wrong with it
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub(crate) fn new(line: usize, kind: SyntaxErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Errors raised while loading a script file.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The file could not be read.
    #[error("Failed to read script {}: {source}", path.display())]
    Io {
        /// Script path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file contains a malformed statement.
    #[error("{}:{}: {}", path.display(), source.line, source.kind)]
    Syntax {
        /// Script path
        path: PathBuf,
        /// The offending line and reason
        #[source]
        source: SyntaxError,
    },
}

impl ScriptError {
    /// Line number of the offending statement, if the error is a syntax error.
    pub fn line(&self) -> Option<usize> {
        match self {
            ScriptError::Io { .. } => None,
            ScriptError::Syntax { source, .. } => Some(source.line),
        }
    }
}

/// Broad categories of transport failures, used in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportErrorKind {
    /// The request could not be built.
    HttpRequestBuilderError,
    /// The client refused a redirect.
    HttpRequestRedirectError,
    /// The request timed out.
    HttpRequestTimeoutError,
    /// The request failed while being sent.
    HttpRequestRequestError,
    /// No connection could be established.
    HttpRequestConnectError,
    /// The request or response body failed.
    HttpRequestBodyError,
    /// The response body could not be decoded.
    HttpRequestDecodeError,
    /// Any other client failure.
    HttpRequestOtherError,
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransportErrorKind {
    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorKind::HttpRequestBuilderError => "HTTP request builder error",
            TransportErrorKind::HttpRequestRedirectError => "HTTP request redirect error",
            TransportErrorKind::HttpRequestTimeoutError => "HTTP request timeout error",
            TransportErrorKind::HttpRequestRequestError => "HTTP request error",
            TransportErrorKind::HttpRequestConnectError => "HTTP request connect error",
            TransportErrorKind::HttpRequestBodyError => "HTTP request body error",
            TransportErrorKind::HttpRequestDecodeError => "HTTP request decode error",
            TransportErrorKind::HttpRequestOtherError => "HTTP request other error",
        }
    }
}

/// Errors raised by the transport while issuing a hop.
///
/// These are fatal for the whole run; they are never retried or turned into
/// diff entries.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request target is not a usable absolute URL.
    #[error("Invalid request target {uri:?}: {reason}")]
    InvalidTarget {
        /// Target as written in the script (or resolved from `Location`)
        uri: String,
        /// Why it was rejected
        reason: String,
    },

    /// The HTTP client failed to complete the exchange.
    #[error("{kind} for {method} {uri}: {source}")]
    Request {
        /// Failure category
        kind: TransportErrorKind,
        /// Request method
        method: String,
        /// Request target
        uri: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },
}
