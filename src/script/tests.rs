// Script module tests.

use super::*;
use crate::error_handling::{ScriptError, SyntaxErrorKind};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_script(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write script");
    file.flush().expect("Failed to flush script");
    file
}

#[test]
fn test_single_status_only_case() {
    let cases = parse_str("< GET http://x/a\n> 200\n").expect("should parse");
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].responses.len(), 1);
    assert_eq!(cases[0].responses[0].status, 200);
    assert_eq!(cases[0].method, Method::Get);
    assert_eq!(cases[0].uri, "http://x/a");
}

#[test]
fn test_bare_uri_defaults_to_head() {
    let cases = parse_str("< http://x/a\n> 200").expect("should parse");
    assert_eq!(cases[0].method, Method::Head);
    assert_eq!(cases[0].request_line(), "< HEAD http://x/a");
}

#[test]
fn test_cases_keep_file_order_and_lines() {
    let script = "\
# redirects
< http://x/one
> 301

< http://x/two
> 200
# trailing comment
< POST http://x/three
> 405
";
    let cases = parse_str(script).expect("should parse");
    let lines: Vec<usize> = cases.iter().map(|c| c.line).collect();
    let uris: Vec<&str> = cases.iter().map(|c| c.uri.as_str()).collect();
    assert_eq!(lines, vec![2, 5, 8]);
    assert_eq!(uris, vec!["http://x/one", "http://x/two", "http://x/three"]);
}

#[test]
fn test_redirect_chain_with_headers_and_body() {
    let script = "\
< GET http://x/old
> 301
> Location: http://x/new
> 200
> Content-Type: text/html; charset=UTF-8
> =Welcome
> ~Wel+come
> //title
";
    let cases = parse_str(script).expect("should parse");
    let responses = &cases[0].responses;
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].line, 2);
    assert_eq!(responses[0].header("Location"), Some("http://x/new"));
    assert_eq!(responses[1].line, 4);
    assert_eq!(
        responses[1].header("Content-Type"),
        Some("text/html; charset=UTF-8")
    );
    let body: Vec<String> = responses[1].body.iter().map(|b| b.to_string()).collect();
    assert_eq!(body, vec!["=Welcome", "~Wel+come", "//title"]);
    assert_eq!(responses[1].body[2].operator, BodyOperator::StructuredPathQuery);
    assert_eq!(responses[1].body[2].pattern, "/title");
}

#[test]
fn test_repeated_header_keeps_last_value() {
    let cases = parse_str("< http://x/\n> 200\n> X-A: 1\n> X-A: 2").expect("should parse");
    assert_eq!(cases[0].responses[0].headers.len(), 1);
    assert_eq!(cases[0].responses[0].header("X-A"), Some("2"));
}

#[test]
fn test_header_before_status_is_rejected() {
    let error = parse_str("< http://x/\n> Location: http://x/b\n> 301").unwrap_err();
    assert_eq!(error.line, 2);
    assert_eq!(error.kind, SyntaxErrorKind::NoStatusCode);
}

#[test]
fn test_body_assertion_before_status_is_rejected() {
    let error = parse_str("< http://x/\n> 200\n< http://x/b\n> =text").unwrap_err();
    assert_eq!(error.line, 4);
    assert_eq!(error.kind, SyntaxErrorKind::NoStatusCode);
}

#[test]
fn test_request_without_response_is_rejected() {
    let error = parse_str("< http://x/a\n< http://x/b\n> 200").unwrap_err();
    assert_eq!(error.line, 1);
    assert_eq!(error.kind, SyntaxErrorKind::NoExpectedResponse);

    let error = parse_str("< http://x/a\n> 200\n< http://x/b\n").unwrap_err();
    assert_eq!(error.line, 3);
    assert_eq!(error.kind, SyntaxErrorKind::NoExpectedResponse);
}

#[test]
fn test_unknown_statement_is_rejected() {
    let error = parse_str("< http://x/a\n> 200\nhttp://x/b").unwrap_err();
    assert_eq!(error.line, 3);
    assert_eq!(error.kind, SyntaxErrorKind::UnknownStatement('h'));
}

#[test]
fn test_response_without_request_is_rejected() {
    let error = parse_str("> 200").unwrap_err();
    assert_eq!(error.line, 1);
    assert_eq!(error.kind, SyntaxErrorKind::ResponseWithoutRequest);
}

#[test]
fn test_malformed_status_is_rejected() {
    let error = parse_str("< http://x/a\n> 30x").unwrap_err();
    assert_eq!(error.line, 2);
    assert_eq!(error.kind, SyntaxErrorKind::InvalidStatus("30x".to_string()));
}

#[test]
fn test_unknown_method_is_rejected() {
    let error = parse_str("< BREW http://x/pot\n> 418").unwrap_err();
    assert_eq!(error.line, 1);
    assert_eq!(error.kind, SyntaxErrorKind::UnknownMethod("BREW".to_string()));
    assert_eq!(
        error.to_string(),
        "line 1: unknown HTTP method \"BREW\"; expected one of GET, HEAD, POST, PUT, DELETE, PATCH, OPTIONS"
    );
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let cases = parse_str("  <   GET   http://x/a  \n\t>  302 \n").expect("should parse");
    assert_eq!(cases[0].method, Method::Get);
    assert_eq!(cases[0].uri, "http://x/a");
    assert_eq!(cases[0].responses[0].status, 302);
}

#[test]
fn test_empty_script_has_no_cases() {
    assert!(parse_str("").expect("should parse").is_empty());
    assert!(parse_str("# only comments\n\n").expect("should parse").is_empty());
}

#[tokio::test]
async fn test_load_reads_file() {
    let file = write_script("< GET http://x/a\n> 200\n> Content-Type: text/html\n");
    let cases = load(file.path()).await.expect("should load");
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].responses[0].header("Content-Type"), Some("text/html"));
}

#[tokio::test]
async fn test_load_reports_path_and_line() {
    let file = write_script("< http://x/a\n> Location: http://x/b\n");
    let error = load(file.path()).await.unwrap_err();
    assert_eq!(error.line(), Some(2));
    assert!(matches!(error, ScriptError::Syntax { .. }));
    assert!(error
        .to_string()
        .starts_with(&format!("{}:2:", file.path().display())));
}

#[tokio::test]
async fn test_load_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let error = load(&dir.path().join("absent.test")).await.unwrap_err();
    assert!(matches!(error, ScriptError::Io { .. }));
}
