//! Diff entries: the mismatches found while evaluating one test case.

use crate::config::MISSING_LOCATION_EXPECTATION;
use crate::script::BodyOperator;

/// Which expectation a diff entry is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffField {
    /// The status code (rendered without a label)
    Status,
    /// A response header, by the name written in the script
    Header(String),
    /// A body assertion; the expected value carries the sigil and pattern
    Body(BodyOperator),
    /// A hop returned no `Location` but further responses were expected
    MissingLocation,
}

/// One mismatch between an expected and an actual response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    /// Line of the expectation that failed
    pub line: usize,
    /// What was compared
    pub field: DiffField,
    /// Expected value as written in the script
    pub expected: String,
    /// Observed value; `None` when absent or not echoed (response bodies)
    pub actual: Option<String>,
}

impl DiffEntry {
    /// Status code mismatch.
    pub fn status(line: usize, expected: u16, actual: u16) -> Self {
        Self {
            line,
            field: DiffField::Status,
            expected: expected.to_string(),
            actual: Some(actual.to_string()),
        }
    }

    /// Header mismatch; `actual` is `None` when the header is missing.
    pub fn header(line: usize, name: &str, expected: &str, actual: Option<String>) -> Self {
        Self {
            line,
            field: DiffField::Header(name.to_string()),
            expected: expected.to_string(),
            actual,
        }
    }

    /// Failed body assertion. The body itself is never stored; `diagnostic`
    /// explains assertions that could not be evaluated at all.
    pub fn body(
        line: usize,
        operator: BodyOperator,
        expected: String,
        diagnostic: Option<&str>,
    ) -> Self {
        Self {
            line,
            field: DiffField::Body(operator),
            expected,
            actual: diagnostic.map(str::to_string),
        }
    }

    /// The previous hop gave no redirect target for the response at `line`.
    pub fn missing_location(line: usize) -> Self {
        Self {
            line,
            field: DiffField::MissingLocation,
            expected: MISSING_LOCATION_EXPECTATION.to_string(),
            actual: None,
        }
    }
}
