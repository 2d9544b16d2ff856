//! Input data resolution.
//!
//! Variables reach the template from four kinds of source, merged in
//! increasing precedence:
//!
//! 1. environment (`-E`)
//! 2. URL query strings (`--query`)
//! 3. JSON dictionaries, files or stdin (`-j`)
//! 4. key=value pairs (`-p`)
//!
//! All four may be combined; a later source overwrites an earlier one on key
//! collision. Repeated options of one kind merge in command-line order. Once
//! everything is merged, every key is checked against the template variable
//! name grammar.

mod env;
mod json;
mod mapping;
mod pair;
mod query;


pub use mapping::{VariableMapping, validate_variable_name};

use crate::config::Config;
use crate::context::RunContext;
use crate::error::Result;

/// Input data sources requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct InputSources {
    /// Merge the process environment (`-E`).
    pub env: bool,

    /// Query strings, in command-line order.
    pub queries: Vec<String>,

    /// JSON dictionaries, file paths or `-`, in command-line order.
    pub json: Vec<String>,

    /// key=value entries, in command-line order.
    pub pairs: Vec<String>,
}

/// Merge all requested sources into a single validated mapping.
///
/// `template_from_stdin` tells the resolver that stdin is already claimed by
/// the template, so `-j -` must be refused.
pub fn resolve(
    sources: &InputSources,
    ctx: &mut RunContext,
    config: &Config,
    template_from_stdin: bool,
) -> Result<VariableMapping> {
    let mut vars = VariableMapping::new();

    if sources.env {
        let found = env::collect(ctx, config)?;
        tracing::debug!(count = found.len(), "merging environment input");
        vars.merge(found);
    }

    for query in &sources.queries {
        let found = query::parse(query);
        tracing::debug!(count = found.len(), "merging query input");
        vars.merge(found);
    }

    for source in &sources.json {
        let found = json::load(source, ctx, template_from_stdin)?;
        tracing::debug!(count = found.len(), "merging JSON input");
        vars.merge(found);
    }

    for entry in &sources.pairs {
        let (key, value) = pair::parse(entry)?;
        vars.insert(key, value);
    }

    for key in vars.keys() {
        validate_variable_name(key)?;
    }

    tracing::debug!(count = vars.len(), "resolved input data");
    Ok(vars)
}
