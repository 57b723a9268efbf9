//! Command-line entry point for secretsweep.
//!
//! This binary delegates to the shared `entry_point::run_with_args()`
//! function so the CLI and tests go through identical code.

use std::process::ExitCode;

fn main() -> ExitCode {
    match secretsweep::entry_point::run_with_args(std::env::args().skip(1).collect()) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
