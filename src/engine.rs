//! Template engine adapter.
//!
//! Configures a minijinja [`Environment`] the way twigc needs it: a loader
//! over search directories or a single in-memory template, strict or lenient
//! undefined handling, and one escaping strategy applied to every template.
//! Values are escaped by a custom formatter that dispatches to
//! [`crate::escape::strategies`], html included.

use crate::error::{Result, TwigcError};
use crate::escape::{EscapeStrategy, strategies};
use crate::input::VariableMapping;
use minijinja::value::Value;
use minijinja::{AutoEscape, Environment, ErrorKind, Output, State, UndefinedBehavior};
use std::fmt::Write;
use std::path::{Component, Path, PathBuf};

/// Where templates come from.
#[derive(Debug, Clone)]
pub enum TemplateLoader {
    /// Look templates up, in order, in these directories.
    FileSystem(Vec<PathBuf>),
    /// A single template held in memory.
    Memory { name: String, source: String },
}

/// Engine settings resolved for one render.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Referencing an undefined variable is an error.
    pub strict: bool,
    pub escape: EscapeStrategy,
    /// Accepted for compatibility; templates are compiled in memory.
    pub cache_dir: Option<PathBuf>,
}

/// A configured template engine.
pub struct Engine {
    env: Environment<'static>,
}

impl Engine {
    /// Build an engine.
    ///
    /// Fails when the escaping strategy is unknown, or when an in-memory
    /// template does not compile.
    pub fn new(loader: TemplateLoader, options: &EngineOptions) -> Result<Self> {
        let auto_escape = auto_escape_for(&options.escape)?;

        let mut env = Environment::new();
        env.set_undefined_behavior(if options.strict {
            UndefinedBehavior::Strict
        } else {
            UndefinedBehavior::Chainable
        });
        env.set_auto_escape_callback(move |_name| auto_escape);
        env.set_formatter(format_value);

        if let Some(cache_dir) = &options.cache_dir {
            tracing::debug!(path = %cache_dir.display(), "cache directory accepted; templates compile in memory");
        }

        match loader {
            TemplateLoader::FileSystem(dirs) => {
                tracing::debug!(dirs = ?dirs, "using file-system loader");
                env.set_loader(move |name| load_from_dirs(&dirs, name));
            }
            TemplateLoader::Memory { name, source } => {
                tracing::debug!(name = %name, "using in-memory loader");
                env.add_template_owned(name, source)?;
            }
        }

        Ok(Self { env })
    }

    /// Render the named template with the given variables.
    pub fn render(&self, name: &str, vars: &VariableMapping) -> Result<String> {
        let template = self.env.get_template(name)?;
        let rendered = template
            .render(vars.as_map())
            .map_err(|e| match self.describe_undefined(&e, vars) {
                Some(message) => TwigcError::RenderError(message),
                None => e.into(),
            })?;
        tracing::trace!(name, bytes = rendered.len(), "rendered template");
        Ok(rendered)
    }

    /// Name the missing variable behind a strict-mode undefined error.
    ///
    /// Returns `None` when the failing template cannot be inspected or every
    /// variable it references is defined (an undefined attribute, say).
    fn describe_undefined(
        &self,
        err: &minijinja::Error,
        vars: &VariableMapping,
    ) -> Option<String> {
        if !matches!(err.kind(), ErrorKind::UndefinedError) {
            return None;
        }
        let name = err.name()?;
        let template = self.env.get_template(name).ok()?;

        let mut missing: Vec<String> = template
            .undeclared_variables(false)
            .into_iter()
            .filter(|var| !vars.contains_key(var) && !ENGINE_GLOBALS.contains(&var.as_str()))
            .collect();
        missing.sort();
        let variable = missing.into_iter().next()?;

        Some(match err.line() {
            Some(line) => format!(
                "Variable \"{}\" does not exist in \"{}\" at line {}",
                variable, name, line
            ),
            None => format!("Variable \"{}\" does not exist in \"{}\"", variable, name),
        })
    }
}

/// Globals every minijinja environment defines.
const ENGINE_GLOBALS: &[&str] = &["range", "dict", "debug", "namespace"];

fn auto_escape_for(strategy: &EscapeStrategy) -> Result<AutoEscape> {
    Ok(match strategy {
        EscapeStrategy::Disabled => AutoEscape::None,
        EscapeStrategy::Html => AutoEscape::Html,
        EscapeStrategy::Css => AutoEscape::Custom("css"),
        EscapeStrategy::Js => AutoEscape::Custom("js"),
        EscapeStrategy::Json => AutoEscape::Custom("json"),
        EscapeStrategy::Url => AutoEscape::Custom("url"),
        EscapeStrategy::HtmlAttr => AutoEscape::Custom("html_attr"),
        EscapeStrategy::Sh => AutoEscape::Custom("sh"),
        EscapeStrategy::Named(name) => {
            return Err(TwigcError::RenderError(format!(
                "Unknown escaping strategy: {}",
                name
            )));
        }
    })
}

/// Output formatter.
///
/// `none` prints as the empty string. html and the custom strategies escape
/// everything not marked safe; disabled uses minijinja's own formatter.
fn format_value(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> std::result::Result<(), minijinja::Error> {
    if value.is_none() || value.is_undefined() {
        return Ok(());
    }

    let name = match state.auto_escape() {
        AutoEscape::Html => "html",
        AutoEscape::Custom(name) => name,
        _ => return minijinja::escape_formatter(out, state, value),
    };

    let text = value.to_string();
    let escaped = if value.is_safe() {
        text
    } else {
        let escaper = strategies::custom_escaper(name).ok_or_else(|| {
            minijinja::Error::new(
                ErrorKind::InvalidOperation,
                format!("Unknown escaping strategy: {}", name),
            )
        })?;
        escaper(&text)
    };

    out.write_str(&escaped)
        .map_err(|_| minijinja::Error::from(ErrorKind::WriteFailure))
}

/// Resolve a template name against the search directories.
///
/// Names that would leave a search directory (`..`, absolute paths) are
/// treated as not found.
fn load_from_dirs(
    dirs: &[PathBuf],
    name: &str,
) -> std::result::Result<Option<String>, minijinja::Error> {
    let Some(relative) = safe_relative_path(name) else {
        tracing::debug!(name, "refusing template name outside search directories");
        return Ok(None);
    };

    for dir in dirs {
        let path = dir.join(&relative);
        if !path.is_file() {
            continue;
        }
        tracing::trace!(path = %path.display(), "loading template");
        return std::fs::read_to_string(&path).map(Some).map_err(|e| {
            minijinja::Error::new(
                ErrorKind::InvalidOperation,
                format!("could not read template '{}'", path.display()),
            )
            .with_source(e)
        });
    }

    Ok(None)
}

fn safe_relative_path(name: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}
