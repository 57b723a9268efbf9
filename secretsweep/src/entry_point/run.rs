use std::path::Path;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::config::Config;

use super::handlers::{
    handle_remove, handle_replace, handle_report, RemoveArgs, ReplaceArgs, ReportArgs,
};

/// Runs secretsweep with the given arguments using stdout as the writer.
///
/// # Errors
///
/// Returns an error if argument parsing fails, or if the command execution fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Runs secretsweep with the given arguments, writing output to the
/// specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if argument parsing fails, or if the command execution fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["secretsweep".to_owned()];
    program_args.extend(args);
    let mut cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, but captured by redirect
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(2);
                }
            }
        }
    };

    match cli.command.take() {
        Some(Commands::Report {
            input,
            output,
            filter,
            paths,
        }) => {
            let args = ReportArgs {
                input,
                output,
                filter,
                paths,
            };
            let config = load_config(args.input.as_deref());
            handle_report(&args, &config, writer)
        }
        Some(Commands::Replace {
            pairs,
            map,
            from_report,
            mask,
            list_path,
            jar,
            json,
        }) => handle_replace(
            ReplaceArgs {
                pairs,
                map,
                from_report,
                mask,
                list_path,
                jar,
                json,
            },
            &Config::load(),
            writer,
        ),
        Some(Commands::Remove {
            names,
            paths,
            dirs,
            grouped,
            jar,
            json,
        }) => handle_remove(
            RemoveArgs {
                names,
                paths,
                dirs,
                grouped,
                jar,
                json,
            },
            &Config::load(),
            writer,
        ),
        None => {
            let args = ReportArgs {
                input: cli.input,
                output: cli.output,
                filter: cli.filter,
                paths: cli.paths,
            };
            let config = load_config(args.input.as_deref());
            handle_report(&args, &config, writer)
        }
    }
}

/// Config lives next to the report being normalized when one was given,
/// otherwise next to the current directory.
fn load_config(input: Option<&Path>) -> Config {
    match input.filter(|p| p.as_os_str() != "-") {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
