//! Test script data model.

use std::fmt;

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// HTTP request method of a test case.
///
/// Parsed case-insensitively from the script; unknown tokens are rejected at
/// parse time. The method stays the same for every hop of a redirect chain.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Method {
    /// `GET`
    Get,
    /// `HEAD`, used when the script names no method
    #[default]
    Head,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `PATCH`
    Patch,
    /// `OPTIONS`
    Options,
}

impl Method {
    /// Every accepted method token, comma-separated (`GET, HEAD, ...`).
    pub fn accepted() -> String {
        Method::iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
            Method::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// How a body assertion's pattern is matched against the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyOperator {
    /// `=`: the pattern must occur literally in the body
    ExactSubstring,
    /// `~`: the regular expression must match somewhere in the body
    RegexSearch,
    /// `/`: the path query must select something in the parsed document
    StructuredPathQuery,
}

impl BodyOperator {
    /// The sigil that selects this operator in a script.
    pub fn sigil(self) -> char {
        match self {
            BodyOperator::ExactSubstring => '=',
            BodyOperator::RegexSearch => '~',
            BodyOperator::StructuredPathQuery => '/',
        }
    }

    /// Looks up the operator for a sigil character.
    pub fn from_sigil(sigil: char) -> Option<Self> {
        match sigil {
            '=' => Some(BodyOperator::ExactSubstring),
            '~' => Some(BodyOperator::RegexSearch),
            '/' => Some(BodyOperator::StructuredPathQuery),
            _ => None,
        }
    }
}

/// A check against the response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyAssertion {
    /// Matching operator
    pub operator: BodyOperator,
    /// Everything after the sigil
    pub pattern: String,
}

impl fmt::Display for BodyAssertion {
    /// Renders the assertion the way it was written (`=Welcome`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator.sigil(), self.pattern)
    }
}

/// One expected hop of a redirect chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpectedResponse {
    /// Line where the status code was declared
    pub line: usize,
    /// Expected HTTP status code
    pub status: u16,
    /// Expected headers (name as written, exact value)
    pub headers: Vec<(String, String)>,
    /// Body checks, evaluated in order
    pub body: Vec<BodyAssertion>,
}

impl ExpectedResponse {
    /// Creates a response expectation with only a status code.
    pub fn new(line: usize, status: u16) -> Self {
        Self {
            line,
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Sets the expected value of a header; a repeated name replaces the earlier value.
    pub fn set_header(&mut self, name: &str, value: &str) {
        match self.headers.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    /// Expected value of a header, if declared.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// One request directive and its chain of expected responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    /// Line of the `<` directive
    pub line: usize,
    /// Request method, constant across the redirect chain
    pub method: Method,
    /// Initial request target
    pub uri: String,
    /// One expectation per hop, in order
    pub responses: Vec<ExpectedResponse>,
}

impl TestCase {
    /// Creates a test case without expectations.
    pub fn new(line: usize, method: Method, uri: impl Into<String>) -> Self {
        Self {
            line,
            method,
            uri: uri.into(),
            responses: Vec::new(),
        }
    }

    /// The request as echoed in verbose mode (`< GET http://host/path`).
    pub fn request_line(&self) -> String {
        format!("< {} {}", self.method, self.uri)
    }
}
