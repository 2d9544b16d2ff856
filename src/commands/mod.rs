//! Command implementations for twigc.
//!
//! [`run`] is the whole program minus process setup: it parses arguments,
//! dispatches to help, version, credits or render, and turns every error
//! into a one-line `twigc: <message>` diagnostic and an exit code.

mod render;


use crate::cli::Cli;
use crate::config::Config;
use crate::context::{PROGRAM_NAME, RunContext};
use crate::credits::{self, EmbeddedManifest, ManifestReader};
use crate::error::{Result, TwigcError};
use crate::exit_codes;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::io::Write;

/// Run twigc with the given arguments (including `argv[0]`).
///
/// Normal output goes to `out`, diagnostics to `err`. Returns the exit code.
pub fn run<I, T>(args: I, ctx: &mut RunContext, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    match dispatch(cli, ctx, out) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "{}: {}", PROGRAM_NAME, e.to_string().trim_end());
            if matches!(e, TwigcError::NoTemplate) {
                let _ = writeln!(err);
                let _ = write!(err, "{}", Cli::command().render_help());
            }
            tracing::debug!(error = ?e, "run failed");
            e.exit_code()
        }
    }
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{}", e.render());
            exit_codes::SUCCESS
        }
        _ => {
            let rendered = e.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            let message = first.strip_prefix("error: ").unwrap_or(first);
            let _ = writeln!(err, "{}: {}", PROGRAM_NAME, message);
            exit_codes::FAILURE
        }
    }
}

/// Dispatch parsed arguments to their implementation.
fn dispatch(cli: Cli, ctx: &mut RunContext, out: &mut dyn Write) -> Result<()> {
    if cli.version {
        return cmd_version(out);
    }
    if cli.credits {
        return cmd_credits(&EmbeddedManifest, out);
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    render::cmd_render(&cli, &config, ctx, out)
}

fn cmd_version(out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "{} version {}",
        PROGRAM_NAME,
        env!("CARGO_PKG_VERSION")
    )
    .map_err(write_error)
}

fn cmd_credits(reader: &dyn ManifestReader, out: &mut dyn Write) -> Result<()> {
    let packages = reader.packages()?;
    write!(out, "{}", credits::format_table(&packages)).map_err(write_error)
}

fn write_error(e: std::io::Error) -> TwigcError {
    TwigcError::IoError(format!("failed to write output: {}", e))
}
