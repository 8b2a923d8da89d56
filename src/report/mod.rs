//! Diff rendering.
//!
//! Projects a failing test case and its diff into diff-like lines:
//!
//! ```text
//! <@ 12: http://example.com/old
//! >@ 14:
//!     -Content-Type: text/html
//!     +Content-Type: text/plain
//! ```
//!
//! Body assertions never print the response body: a failed `=`, `~` or `/`
//! check renders a bare `+`. The one exception is an assertion that cannot be
//! evaluated at all (a malformed regex or path query), whose `+` line names
//! the problem instead.
//!
//! Formatting is pure; color is applied only when a line is painted for the
//! terminal.

use std::fmt;

use colored::Colorize;

use crate::script::TestCase;
use crate::verify::{DiffEntry, DiffField};

/// Role of a rendered line, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `<@ line: uri`
    Request,
    /// `>@ line:`
    Response,
    /// `-expected`
    Expected,
    /// `+actual`
    Actual,
}

/// One line of a rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// Role of the line
    pub kind: LineKind,
    /// Text without indentation or color
    pub text: String,
}

impl ReportLine {
    fn new(kind: LineKind, text: String) -> Self {
        Self { kind, text }
    }

    /// The line with terminal colors: expected green, actual red.
    pub fn painted(&self) -> String {
        match self.kind {
            LineKind::Request | LineKind::Response => self.text.clone(),
            LineKind::Expected => format!("\t{}", self.text.green()),
            LineKind::Actual => format!("\t{}", self.text.red()),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LineKind::Request | LineKind::Response => f.write_str(&self.text),
            LineKind::Expected | LineKind::Actual => write!(f, "\t{}", self.text),
        }
    }
}

/// Label written in front of expected and actual values.
fn label(field: &DiffField) -> String {
    match field {
        DiffField::Status | DiffField::Body(_) => String::new(),
        DiffField::Header(name) => format!("{}: ", name),
        DiffField::MissingLocation => "Location: ".to_string(),
    }
}

/// Lines for a single diff entry.
pub fn format_entry(entry: &DiffEntry) -> Vec<ReportLine> {
    let label = label(&entry.field);
    let mut lines = vec![
        ReportLine::new(LineKind::Response, format!(">@ {}:", entry.line)),
        ReportLine::new(LineKind::Expected, format!("-{}{}", label, entry.expected)),
    ];

    let actual = entry.actual.as_deref().unwrap_or_default();
    match entry.field {
        // Unlabelled status lines only show an actual value when there is one
        DiffField::Status if entry.actual.is_none() => {}
        _ => lines.push(ReportLine::new(
            LineKind::Actual,
            format!("+{}{}", label, actual),
        )),
    }
    lines
}

/// Lines for a failing test case: its request header, then every diff entry.
pub fn format_report(case: &TestCase, diff: &[DiffEntry]) -> Vec<ReportLine> {
    let mut lines = vec![ReportLine::new(
        LineKind::Request,
        format!("<@ {}: {}", case.line, case.uri),
    )];
    lines.extend(diff.iter().flat_map(format_entry));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{BodyOperator, Method};

    fn plain(lines: &[ReportLine]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_status_diff_is_unlabelled() {
        let lines = format_entry(&DiffEntry::status(4, 301, 200));
        assert_eq!(plain(&lines), vec![">@ 4:", "\t-301", "\t+200"]);
    }

    #[test]
    fn test_header_diff_is_labelled() {
        let entry = DiffEntry::header(
            3,
            "Content-Type",
            "text/html",
            Some("text/plain".to_string()),
        );
        assert_eq!(
            plain(&format_entry(&entry)),
            vec![
                ">@ 3:",
                "\t-Content-Type: text/html",
                "\t+Content-Type: text/plain"
            ]
        );
    }

    #[test]
    fn test_missing_header_has_empty_actual() {
        let entry = DiffEntry::header(3, "Location", "http://x/b", None);
        assert_eq!(
            plain(&format_entry(&entry)),
            vec![">@ 3:", "\t-Location: http://x/b", "\t+Location: "]
        );
    }

    #[test]
    fn test_body_diff_suppresses_actual() {
        let entry = DiffEntry::body(5, BodyOperator::ExactSubstring, "=Welcome".to_string(), None);
        assert_eq!(
            plain(&format_entry(&entry)),
            vec![">@ 5:", "\t-=Welcome", "\t+"]
        );
    }

    #[test]
    fn test_invalid_path_expression_is_shown() {
        let entry = DiffEntry::body(
            5,
            BodyOperator::StructuredPathQuery,
            "//h1[".to_string(),
            Some("Invalid path expression"),
        );
        assert_eq!(
            plain(&format_entry(&entry))[2],
            "\t+Invalid path expression"
        );
    }

    #[test]
    fn test_missing_location_diff() {
        let lines = format_entry(&DiffEntry::missing_location(7));
        assert_eq!(
            plain(&lines),
            vec![">@ 7:", "\t-Location: <redirect to next response>", "\t+Location: "]
        );
    }

    #[test]
    fn test_report_starts_with_request_line() {
        let case = TestCase::new(1, Method::Get, "http://x/a");
        let diff = vec![
            DiffEntry::status(2, 200, 500),
            DiffEntry::header(2, "Server", "nginx", None),
        ];
        let lines = format_report(&case, &diff);
        assert_eq!(lines[0].text, "<@ 1: http://x/a");
        assert_eq!(lines[0].kind, LineKind::Request);
        assert_eq!(lines.len(), 1 + 3 + 3);
    }

    #[test]
    fn test_painted_keeps_text() {
        let line = ReportLine::new(LineKind::Expected, "-200".to_string());
        assert!(line.painted().contains("-200"));
        assert!(line.painted().starts_with('\t'));
    }
}
