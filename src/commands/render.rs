//! Implementation of template rendering.
//!
//! # What a render does
//!
//! 1. Decides where the template comes from (path, or `-` for stdin)
//! 2. Builds and checks the search directory list
//! 3. Resolves input data from every requested source
//! 4. Selects the escaping strategy
//! 5. Picks a loader: file system for paths, a staged temp file for stdin
//!    with search directories, memory for plain stdin
//! 6. Renders and prints the result without trailing line breaks

use super::write_error;
use crate::cli::Cli;
use crate::config::Config;
use crate::context::RunContext;
use crate::engine::{Engine, EngineOptions, TemplateLoader};
use crate::error::{Result, TwigcError};
use crate::escape;
use crate::fs::{STAGED_TEMPLATE_NAME, StagedTemplate, require_dir};
use crate::input::{self, InputSources};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Operand value meaning "read the template from stdin".
const STDIN_TEMPLATE: &str = "-";

/// Execute a render.
pub fn cmd_render(
    cli: &Cli,
    config: &Config,
    ctx: &mut RunContext,
    out: &mut dyn Write,
) -> Result<()> {
    let template = resolve_template_operand(cli.template.as_deref(), ctx)?;
    let from_stdin = template == STDIN_TEMPLATE;

    let mut dirs: Vec<PathBuf> = Vec::new();
    if !from_stdin {
        dirs.push(template_dir(&template));
    }
    dirs.extend(cli.dirs.iter().cloned());
    dirs.extend(config.search_dirs.iter().cloned());
    for dir in &dirs {
        require_dir(dir, "search directory")?;
    }

    let cache_dir = cli.cache.clone().or_else(|| config.cache_dir.clone());
    if let Some(cache_dir) = &cache_dir {
        require_dir(cache_dir, "cache directory")?;
    }

    let sources = InputSources {
        env: cli.env,
        queries: cli.queries.clone(),
        json: cli.json.clone(),
        pairs: cli.pairs.clone(),
    };
    let vars = input::resolve(&sources, ctx, config, from_stdin)?;

    let token = cli.escape.as_deref().or(config.escape.as_deref());
    let options = EngineOptions {
        strict: cli.strict || config.strict,
        escape: escape::select(token, &template),
        cache_dir,
    };

    // `_staged` keeps a stdin template on disk until rendering is over.
    let (loader, name, _staged) = if !from_stdin {
        let name = template_file_name(&template)?;
        (TemplateLoader::FileSystem(dirs), name, None)
    } else if !dirs.is_empty() {
        let source = ctx.read_stdin()?;
        let staged = StagedTemplate::create(&ctx.temp_root, &source)?;
        let mut search = vec![staged.dir().to_path_buf()];
        search.extend(dirs);
        (
            TemplateLoader::FileSystem(search),
            STAGED_TEMPLATE_NAME.to_string(),
            Some(staged),
        )
    } else {
        let source = ctx.read_stdin()?;
        let loader = TemplateLoader::Memory {
            name: STDIN_TEMPLATE.to_string(),
            source,
        };
        (loader, STDIN_TEMPLATE.to_string(), None)
    };

    tracing::debug!(template = %template, name = %name, strategy = %options.escape, strict = options.strict, "rendering");

    let engine = Engine::new(loader, &options)?;
    let rendered = engine.render(&name, &vars)?;

    writeln!(out, "{}", rendered.trim_end_matches(['\r', '\n'])).map_err(write_error)
}

/// Fall back to stdin when no operand is given and stdin is not a terminal.
fn resolve_template_operand(operand: Option<&str>, ctx: &RunContext) -> Result<String> {
    match operand {
        Some(template) => Ok(template.to_string()),
        None if !ctx.stdin_is_terminal => Ok(STDIN_TEMPLATE.to_string()),
        None => Err(TwigcError::NoTemplate),
    }
}

/// Directory containing the template; `.` for a bare file name.
fn template_dir(template: &str) -> PathBuf {
    match Path::new(template).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn template_file_name(template: &str) -> Result<String> {
    Path::new(template)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| TwigcError::UsageError(format!("Illegal template path: {}", template)))
}
