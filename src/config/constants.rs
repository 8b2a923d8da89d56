//! Configuration constants.
//!
//! This module defines the fixed values the verifier applies to every request
//! and the script grammar's reserved characters.

/// Name reported in the default User-Agent and in fatal error messages.
pub const TOOL_NAME: &str = "htaccess-test";

/// Default User-Agent string for HTTP requests (`htaccess-test/<version>`).
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("htaccess-test/", env!("CARGO_PKG_VERSION"));

/// Name of the marker injected by `--header` and `--cookie`.
///
/// Lets rewrite rules on the server side recognize test traffic.
pub const TEST_MARKER_NAME: &str = "X-Test";
/// Value of the marker injected by `--header` and `--cookie`.
pub const TEST_MARKER_VALUE: &str = ".htaccess";

// Cache-busting headers sent with every request so intermediaries never
// answer from a stale redirect.
/// `Cache-Control` request header value
pub const CACHE_CONTROL_VALUE: &str = "no-cache, no-store";
/// `Pragma` request header value
pub const PRAGMA_VALUE: &str = "no-cache";

// Script grammar
/// Leading character of a comment line
pub const COMMENT_MARKER: char = '#';
/// Leading character of a request directive
pub const REQUEST_MARKER: char = '<';
/// Leading character of a response directive
pub const RESPONSE_MARKER: char = '>';
/// Separator between a header name and its expected value
pub const HEADER_SEPARATOR: &str = ": ";

/// Rendered in place of the actual value when a path query cannot be evaluated.
pub const INVALID_PATH_EXPRESSION: &str = "Invalid path expression";
/// Rendered in place of the actual value when a regex pattern does not compile.
pub const INVALID_REGEX: &str = "Invalid regular expression";
/// Expected value shown when a hop produced no `Location` to follow.
pub const MISSING_LOCATION_EXPECTATION: &str = "<redirect to next response>";
