//! Run driver.
//!
//! Loads each script in order, executes its test cases one at a time and stops
//! at the first failing test case: its diff is written out and no further
//! test case or file is attempted.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::Config;
use crate::fetch::{RequestProfile, Transport};
use crate::initialization::{init_profile, init_transport};
use crate::report::format_report;
use crate::script::{load, TestCase};
use crate::verify::{execute, DiffEntry};

/// The first failing test case of a run.
#[derive(Debug, Clone)]
pub struct Failure {
    /// Script the test case came from
    pub file: PathBuf,
    /// The failing test case
    pub case: TestCase,
    /// Its (non-empty) diff
    pub diff: Vec<DiffEntry>,
}

/// Results of a run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Number of script files that were loaded
    pub files: usize,
    /// Number of test cases that passed
    pub passed: usize,
    /// The failing test case, if any
    pub failure: Option<Failure>,
}

impl RunReport {
    /// `true` when every test case of every file passed.
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }

    /// Process exit code for this outcome: 0 on success, 1 on failure.
    pub fn exit_code(&self) -> i32 {
        if self.succeeded() {
            0
        } else {
            1
        }
    }
}

/// Runs every script in `config.files` against `transport`.
///
/// User-facing output (verbose echo, the failure report) is written to `out`.
///
/// # Errors
///
/// Returns an error if a script cannot be read or parsed, if a request cannot
/// be completed, or if writing to `out` fails. Test case failures are not
/// errors; they are returned in the report.
pub async fn run_scripts<T: Transport, W: Write>(
    config: &Config,
    profile: &RequestProfile,
    transport: &T,
    out: &mut W,
) -> Result<RunReport> {
    let mut report = RunReport::default();
    let announce_files = config.verbose && config.files.len() > 1;

    for file in &config.files {
        if announce_files {
            writeln!(out, "{}", file.display())?;
        }

        let cases = load(file).await?;
        report.files += 1;

        for case in cases {
            if config.verbose {
                writeln!(out, "{}", case.request_line())?;
            }

            let diff = execute(&case, profile, transport)
                .await
                .with_context(|| format!("{}:{}: request failed", file.display(), case.line))?;

            if diff.is_empty() {
                debug!("{}:{} passed", file.display(), case.line);
                report.passed += 1;
                continue;
            }

            for line in format_report(&case, &diff) {
                writeln!(out, "{}", line.painted())?;
            }
            info!(
                "{}:{} failed after {} passing test case(s)",
                file.display(),
                case.line,
                report.passed
            );
            report.failure = Some(Failure {
                file: file.clone(),
                case,
                diff,
            });
            return Ok(report);
        }
    }

    info!(
        "{} test case(s) in {} file(s) passed",
        report.passed, report.files
    );
    Ok(report)
}

/// Runs the configured scripts with the production transport, writing to stdout.
///
/// # Errors
///
/// See [`run_scripts`]; also fails if the HTTP client or request profile
/// cannot be initialized.
pub async fn run(config: &Config) -> Result<RunReport> {
    let profile = init_profile(config).context("Failed to build request headers")?;
    let transport = init_transport().context("Failed to initialize HTTP client")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_scripts(config, &profile, &transport, &mut out).await
}
