//! htaccess_test library: declarative HTTP behavior verification
//!
//! This library reads line-oriented test scripts describing requests and the
//! chain of responses a server is expected to answer with (status codes,
//! headers, body fragments), issues the requests hop by hop, and reports the
//! first mismatch as a diff.
//!
//! # Example
//!
//! ```no_run
//! use htaccess_test::{run, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     files: vec![PathBuf::from("redirects.test")],
//!     ..Default::default()
//! };
//!
//! let report = run(&config).await?;
//! println!("{} test case(s) passed", report.passed);
//! # Ok(())
//! # }
//! ```
//!
//! # Script format
//!
//! ```text
//! # http → https, then the canonical host
//! < GET http://example.com/
//! > 301
//! > Location: https://example.com/
//! > 200
//! > Content-Type: text/html; charset=UTF-8
//! > =Welcome
//! > ~<title>[^<]+</title>
//! > //meta[@name='description']
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod report;
mod run;
pub mod script;
pub mod verify;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ScriptError, SyntaxError, TransportError};
pub use run::{run, run_scripts, Failure, RunReport};
pub use script::{load, parse_str, TestCase};
pub use verify::{execute, DiffEntry};
