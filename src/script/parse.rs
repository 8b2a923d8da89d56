//! Line-oriented script parser.
//!
//! Each physical line is one statement:
//!
//! ```text
//! # comment
//! < [METHOD ]URI
//! > STATUS
//! > Header-Name: value
//! > =literal substring
//! > ~regex pattern
//! > /path query
//! ```
//!
//! Response lines are classified in a fixed order: a leading sigil makes a body
//! assertion, a single `": "` makes a header, anything else must be a status
//! code that opens the next expected response.

use std::path::Path;
use std::str::FromStr;

use log::{debug, trace};

use crate::config::{COMMENT_MARKER, HEADER_SEPARATOR, REQUEST_MARKER, RESPONSE_MARKER};
use crate::error_handling::{ScriptError, SyntaxError, SyntaxErrorKind};

use super::model::{BodyAssertion, BodyOperator, ExpectedResponse, Method, TestCase};

/// The remainder of a `>` line, classified.
#[derive(Debug, PartialEq, Eq)]
enum ResponseStatement<'a> {
    Body(BodyAssertion),
    Header(&'a str, &'a str),
    Status(u16),
}

impl<'a> ResponseStatement<'a> {
    fn classify(rest: &'a str) -> Result<Self, SyntaxErrorKind> {
        if let Some(operator) = rest.chars().next().and_then(BodyOperator::from_sigil) {
            return Ok(ResponseStatement::Body(BodyAssertion {
                operator,
                // Sigils are ASCII, so slicing off one byte is safe
                pattern: rest[1..].to_string(),
            }));
        }

        if let Some((name, value)) = rest.split_once(HEADER_SEPARATOR) {
            if !value.contains(HEADER_SEPARATOR) {
                return Ok(ResponseStatement::Header(name, value));
            }
        }

        rest.parse::<u16>()
            .map(ResponseStatement::Status)
            .map_err(|_| SyntaxErrorKind::InvalidStatus(rest.to_string()))
    }
}

/// Splits the remainder of a `<` line into method and URI.
fn parse_request(rest: &str) -> Result<(Method, &str), SyntaxErrorKind> {
    if rest.is_empty() {
        return Err(SyntaxErrorKind::MissingUri);
    }
    match rest.split_once(' ') {
        Some((token, uri)) => {
            let method = Method::from_str(token)
                .map_err(|_| SyntaxErrorKind::UnknownMethod(token.to_string()))?;
            let uri = uri.trim();
            if uri.is_empty() {
                return Err(SyntaxErrorKind::MissingUri);
            }
            Ok((method, uri))
        }
        None => Ok((Method::default(), rest)),
    }
}

/// Single forward pass over a script, holding the "current test case" cursor.
#[derive(Debug, Default)]
struct ScriptParser {
    cases: Vec<TestCase>,
    current: Option<TestCase>,
}

impl ScriptParser {
    fn feed(&mut self, lineno: usize, raw: &str) -> Result<(), SyntaxError> {
        let line = raw.trim();
        let Some(statement) = line.chars().next() else {
            return Ok(());
        };
        let rest = line[statement.len_utf8()..].trim();
        let fail = |kind| SyntaxError::new(lineno, kind);

        match statement {
            COMMENT_MARKER => Ok(()),
            REQUEST_MARKER => {
                let (method, uri) = parse_request(rest).map_err(fail)?;
                self.close_current()?;
                self.current = Some(TestCase::new(lineno, method, uri));
                Ok(())
            }
            RESPONSE_MARKER => {
                let case = self
                    .current
                    .as_mut()
                    .ok_or_else(|| fail(SyntaxErrorKind::ResponseWithoutRequest))?;
                match ResponseStatement::classify(rest).map_err(fail)? {
                    ResponseStatement::Status(status) => {
                        case.responses.push(ExpectedResponse::new(lineno, status));
                    }
                    ResponseStatement::Header(name, value) => {
                        case.responses
                            .last_mut()
                            .ok_or_else(|| fail(SyntaxErrorKind::NoStatusCode))?
                            .set_header(name, value);
                    }
                    ResponseStatement::Body(assertion) => {
                        case.responses
                            .last_mut()
                            .ok_or_else(|| fail(SyntaxErrorKind::NoStatusCode))?
                            .body
                            .push(assertion);
                    }
                }
                Ok(())
            }
            other => Err(fail(SyntaxErrorKind::UnknownStatement(other))),
        }
    }

    fn close_current(&mut self) -> Result<(), SyntaxError> {
        if let Some(case) = self.current.take() {
            if case.responses.is_empty() {
                return Err(SyntaxError::new(
                    case.line,
                    SyntaxErrorKind::NoExpectedResponse,
                ));
            }
            self.cases.push(case);
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<TestCase>, SyntaxError> {
        self.close_current()?;
        Ok(self.cases)
    }
}

/// Parses script text into test cases, in file order.
///
/// # Errors
///
/// Returns the first `SyntaxError` encountered; no test cases are returned
/// from a script that does not parse completely.
pub fn parse_str(text: &str) -> Result<Vec<TestCase>, SyntaxError> {
    let mut parser = ScriptParser::default();
    for (index, line) in text.lines().enumerate() {
        parser.feed(index + 1, line)?;
    }
    parser.finish()
}

/// Loads a script file into test cases.
///
/// # Errors
///
/// Returns `ScriptError::Io` if the file cannot be read and
/// `ScriptError::Syntax` (with the offending line) if it does not parse.
pub async fn load(path: &Path) -> Result<Vec<TestCase>, ScriptError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let cases = parse_str(&text).map_err(|source| ScriptError::Syntax {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} test case(s) from {}", cases.len(), path.display());
    if log::log_enabled!(log::Level::Trace) {
        trace!(
            "{}",
            serde_json::to_string_pretty(&cases).unwrap_or_else(|e| e.to_string())
        );
    }
    Ok(cases)
}
