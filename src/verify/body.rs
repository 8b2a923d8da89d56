//! Body assertion evaluation.

use regex::Regex;
use sxd_document::Package;
use sxd_xpath::{evaluate_xpath, Value};

use crate::config::{INVALID_PATH_EXPRESSION, INVALID_REGEX};
use crate::script::{BodyAssertion, BodyOperator};

/// Outcome of one body assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyCheck {
    /// The assertion holds
    Pass,
    /// The assertion does not hold
    Fail,
    /// The pattern could not be evaluated; counts as a failure
    Invalid(&'static str),
}

/// Evaluates a body assertion against a response body.
pub fn check_body(assertion: &BodyAssertion, body: &str) -> BodyCheck {
    let pattern = assertion.pattern.as_str();
    match assertion.operator {
        BodyOperator::ExactSubstring => pass_if(body.contains(pattern)),
        BodyOperator::RegexSearch => match Regex::new(pattern) {
            Ok(re) => pass_if(re.is_match(body)),
            Err(e) => {
                log::debug!("Invalid regex {:?}: {}", pattern, e);
                BodyCheck::Invalid(INVALID_REGEX)
            }
        },
        BodyOperator::StructuredPathQuery => {
            // The sigil is the leading `/` of the absolute path
            match path_query_selects(body, &format!("/{}", pattern)) {
                Some(selected) => pass_if(selected),
                None => BodyCheck::Invalid(INVALID_PATH_EXPRESSION),
            }
        }
    }
}

fn pass_if(condition: bool) -> BodyCheck {
    if condition {
        BodyCheck::Pass
    } else {
        BodyCheck::Fail
    }
}

/// Parses `body` as HTML and reports whether `query` selects anything.
///
/// Returns `None` if the query does not parse or cannot be evaluated.
fn path_query_selects(body: &str, query: &str) -> Option<bool> {
    let package: Package = sxd_html::parse_html(body);
    let document = package.as_document();
    match evaluate_xpath(&document, query) {
        Ok(Value::Nodeset(nodes)) => Some(nodes.size() > 0),
        Ok(Value::String(s)) => Some(!s.is_empty()),
        Ok(Value::Number(n)) => Some(n != 0.0 && !n.is_nan()),
        Ok(Value::Boolean(b)) => Some(b),
        Err(e) => {
            log::debug!("Invalid path expression {:?}: {:?}", query, e);
            None
        }
    }
}
