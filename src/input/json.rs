//! JSON input: literal dictionaries, files, or stdin.

use super::VariableMapping;
use crate::context::RunContext;
use crate::error::{Result, TwigcError};
use serde_json::Value;
use std::path::Path;

/// Load one JSON source.
///
/// `source` is `-` for stdin, a literal object when its first non-blank
/// character is `{`, and a file path otherwise. A blank payload yields no
/// variables. Stdin must be piped; a terminal is refused rather than waited on.
pub fn load(
    source: &str,
    ctx: &mut RunContext,
    template_from_stdin: bool,
) -> Result<VariableMapping> {
    let text = if source == "-" {
        if template_from_stdin {
            return Err(TwigcError::UsageError(
                "Can not read both template and JSON input from stdin".to_string(),
            ));
        }
        if ctx.stdin_is_terminal {
            return Err(TwigcError::UsageError(
                "Expected JSON input on STDIN".to_string(),
            ));
        }
        ctx.read_stdin()?
    } else if source.trim_start().starts_with('{') {
        source.to_string()
    } else {
        read_file(Path::new(source))?
    };

    parse_dictionary(&text)
}

fn read_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(TwigcError::UsageError(format!(
            "Missing or invalid JSON file: {}",
            path.display()
        )));
    }
    tracing::debug!(path = %path.display(), "reading JSON input file");
    std::fs::read_to_string(path).map_err(|e| {
        TwigcError::IoError(format!(
            "failed to read JSON file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Decode a JSON payload that must be an object.
pub fn parse_dictionary(text: &str) -> Result<VariableMapping> {
    if text.trim().is_empty() {
        return Ok(VariableMapping::new());
    }

    let value: Value = serde_json::from_str(text)
        .map_err(|e| TwigcError::UsageError(format!("Invalid JSON input: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map.into()),
        _ => Err(TwigcError::UsageError(
            "JSON input must be a dictionary".to_string(),
        )),
    }
}
