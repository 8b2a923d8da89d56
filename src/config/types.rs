//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_USER_AGENT;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Check a single script
/// htaccess-test redirects.test
///
/// # Echo every request and mark traffic with the X-Test header
/// htaccess-test -v -H redirects.test rewrites.test
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "htaccess-test",
    version,
    about = "Checks whether your .htaccess files work as expected by running request/response scripts against the server."
)]
pub struct Opt {
    /// Script files to run, in order
    #[arg(value_parser, required = true)]
    pub files: Vec<PathBuf>,

    /// Output request URI (and file names when several files are given)
    #[arg(short, long)]
    pub verbose: bool,

    /// Send `X-Test=.htaccess` cookie
    #[arg(short = 'b', long)]
    pub cookie: bool,

    /// Send `X-Test: .htaccess` header
    #[arg(short = 'H', long)]
    pub header: bool,

    /// Use the specified user agent
    #[arg(short = 'A', long)]
    pub user_agent: Option<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use htaccess_test::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     files: vec![PathBuf::from("redirects.test")],
///     send_test_header: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Script files to run, in order
    pub files: Vec<PathBuf>,

    /// Echo requests and file names
    pub verbose: bool,

    /// Send the `X-Test=.htaccess` cookie with every request
    pub send_test_cookie: bool,

    /// Send the `X-Test: .htaccess` header with every request
    pub send_test_header: bool,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            verbose: false,
            send_test_cookie: false,
            send_test_header: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            files: opt.files,
            verbose: opt.verbose,
            send_test_cookie: opt.cookie,
            send_test_header: opt.header,
            user_agent: opt
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
