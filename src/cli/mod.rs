//! CLI argument parsing for twigc.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! actual behaviour lives in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Render a Twig-style template.
///
/// Variables come from the environment, URL query strings, JSON or
/// key=value pairs, in that order of increasing precedence.
#[derive(Parser, Debug)]
#[command(name = "twigc")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Template file to render (use `-` for stdin).
    pub template: Option<String>,

    /// Display version information and exit.
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Display dependency information and exit.
    #[arg(long)]
    pub credits: bool,

    /// Load defaults from the specified YAML configuration file.
    #[arg(long, value_name = "file")]
    pub config: Option<PathBuf>,

    /// Enable caching to specified directory.
    #[arg(long, value_name = "dir")]
    pub cache: Option<PathBuf>,

    /// Add specified search directory to loader.
    #[arg(short, long = "dir", value_name = "dir")]
    pub dirs: Vec<PathBuf>,

    /// Specify default auto-escaping strategy.
    #[arg(short, long, value_name = "strategy")]
    pub escape: Option<String>,

    /// Derive input data from environment.
    #[arg(short = 'E', long)]
    pub env: bool,

    /// Derive input data from specified JSON file or dictionary string.
    #[arg(short, long, value_name = "dict/file")]
    pub json: Vec<String>,

    /// Derive input data from specified key=value pair.
    #[arg(short, long = "pair", value_name = "input")]
    pub pairs: Vec<String>,

    /// Derive input data from specified URL query string.
    #[arg(long = "query", value_name = "input")]
    pub queries: Vec<String>,

    /// Throw an error when an undefined variable is referenced.
    #[arg(short, long)]
    pub strict: bool,
}
