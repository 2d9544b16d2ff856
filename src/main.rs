//! twigc: render Twig-style templates from the command line.
//!
//! This is the main entry point for the `twigc` CLI. It installs logging,
//! captures the process context, and hands over to [`commands::run`].

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod credits;
pub mod engine;
pub mod error;
pub mod escape;
pub mod exit_codes;
pub mod fs;
pub mod input;

#[cfg(test)]
mod test_support;

use context::RunContext;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TWIGC_LOG=debug`.
const LOG_ENV: &str = "TWIGC_LOG";

fn main() -> ExitCode {
    init_logging();

    let mut ctx = RunContext::from_process();
    let code = commands::run(
        std::env::args_os(),
        &mut ctx,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    ExitCode::from(code as u8)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
