//! Test script model and parser.
//!
//! A script is an ordered list of test cases. Each test case is one request
//! directive followed by one expected response per hop of the redirect chain
//! the server is expected to produce.

mod model;
mod parse;

// Re-export public API
pub use model::{BodyAssertion, BodyOperator, ExpectedResponse, Method, TestCase};
pub use parse::{load, parse_str};
