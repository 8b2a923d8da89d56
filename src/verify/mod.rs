//! Execution engine.
//!
//! Evaluates one test case by walking its redirect chain: request a hop,
//! compare the response to the matching expectation, follow `Location` to the
//! next hop. The first hop with a mismatch ends the test case.

mod body;
mod diff;

use log::debug;

use crate::error_handling::TransportError;
use crate::fetch::{resolve_location, HopResponse, RequestProfile, Transport};
use crate::script::{ExpectedResponse, TestCase};

// Re-export public API
pub use body::{check_body, BodyCheck};
pub use diff::{DiffEntry, DiffField};

/// Runs a test case and returns its diff (empty when it passes).
///
/// Every hop uses the test case's method and the shared `profile`; the
/// transport never follows redirects, so each response in the chain is
/// compared against its own expectation.
///
/// # Errors
///
/// Transport failures are returned unchanged and abort the run. Mismatches
/// are not errors.
pub async fn execute<T: Transport>(
    case: &TestCase,
    profile: &RequestProfile,
    transport: &T,
) -> Result<Vec<DiffEntry>, TransportError> {
    let mut next_uri = Some(case.uri.clone());

    for (hop, expect) in case.responses.iter().enumerate() {
        let Some(uri) = next_uri.take() else {
            debug!(
                "Line {}: hop {} has no Location to follow for line {}",
                case.line, hop, expect.line
            );
            return Ok(vec![DiffEntry::missing_location(expect.line)]);
        };

        debug!("Line {}: hop {} {} {}", case.line, hop + 1, case.method, uri);
        let response = transport.send(profile.request(case.method, &uri)).await?;

        let diff = compare(expect, &response);
        if !diff.is_empty() {
            return Ok(diff);
        }

        next_uri = response
            .location()
            .map(|location| resolve_location(&uri, &location));
    }

    Ok(Vec::new())
}

/// Compares one response against its expectation.
///
/// Status and every expected header are always compared; body assertions
/// are evaluated in order and stop at the first one that fails.
pub fn compare(expect: &ExpectedResponse, response: &HopResponse) -> Vec<DiffEntry> {
    let mut diff = Vec::new();

    if response.status != expect.status {
        diff.push(DiffEntry::status(expect.line, expect.status, response.status));
    }

    for (name, expected) in &expect.headers {
        match response.header(name) {
            None => diff.push(DiffEntry::header(expect.line, name, expected, None)),
            Some(actual) if actual != *expected => {
                diff.push(DiffEntry::header(expect.line, name, expected, Some(actual)))
            }
            Some(_) => {}
        }
    }

    for assertion in &expect.body {
        let diagnostic = match check_body(assertion, &response.body) {
            BodyCheck::Pass => continue,
            BodyCheck::Fail => None,
            BodyCheck::Invalid(reason) => Some(reason),
        };
        diff.push(DiffEntry::body(
            expect.line,
            assertion.operator,
            assertion.to_string(),
            diagnostic,
        ));
        break;
    }

    diff
}
