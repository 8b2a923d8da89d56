// Shared test helpers for writing scripts and running them.

use std::io::Write;

use htaccess_test::fetch::{ReqwestTransport, RequestProfile};
use htaccess_test::initialization::init_client;
use htaccess_test::{run_scripts, Config, RunReport};
use tempfile::NamedTempFile;

/// Writes script text to a temporary file.
#[allow(dead_code)] // Used by other test files
pub fn write_script(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write script");
    file.flush().expect("Failed to flush script");
    file
}

/// Runs the configured scripts against the real transport and captures the output.
#[allow(dead_code)] // Used by other test files
pub async fn run_capturing(config: &Config) -> (anyhow::Result<RunReport>, String) {
    let profile = RequestProfile::from_config(config).expect("valid profile");
    let transport = ReqwestTransport::new(init_client().expect("client"));
    let mut out = Vec::new();
    let result = run_scripts(config, &profile, &transport, &mut out).await;
    (result, String::from_utf8_lossy(&out).into_owned())
}
