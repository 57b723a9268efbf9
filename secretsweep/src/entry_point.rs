//! Shared entry point: argument parsing down to an exit code.

mod handlers;
mod run;

pub use run::{run_with_args, run_with_args_to};
