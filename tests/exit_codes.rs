//! Tests for the exit code policy: 0 when everything passed, 1 on the first failure.

use htaccess_test::script::Method;
use htaccess_test::{DiffEntry, Failure, RunReport, TestCase};
use std::path::PathBuf;

#[test]
fn test_all_passed_exits_zero() {
    let report = RunReport {
        files: 2,
        passed: 7,
        failure: None,
    };
    assert!(report.succeeded());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_empty_run_exits_zero() {
    let report = RunReport::default();
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_failure_exits_one() {
    let report = RunReport {
        files: 1,
        passed: 3,
        failure: Some(Failure {
            file: PathBuf::from("site.test"),
            case: TestCase::new(9, Method::Head, "http://localhost/"),
            diff: vec![DiffEntry::status(10, 301, 200)],
        }),
    };
    assert!(!report.succeeded());
    assert_eq!(report.exit_code(), 1);
}
