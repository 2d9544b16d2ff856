//! Error types for the twigc CLI.
//!
//! Uses thiserror for derive macros. Messages are written to be printed
//! verbatim after the `twigc: ` prefix.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for twigc operations.
#[derive(Error, Debug)]
pub enum TwigcError {
    /// Bad or missing arguments, malformed input data, or an illegal variable name.
    #[error("{0}")]
    UsageError(String),

    /// The configuration file or the runtime environment does not allow the request.
    #[error("{0}")]
    ConfigError(String),

    /// The template engine failed to load or render the template.
    #[error("{0}")]
    RenderError(String),

    /// Reading input or writing output failed.
    #[error("{0}")]
    IoError(String),

    /// No template operand was given and stdin is a terminal.
    #[error("No template specified")]
    NoTemplate,
}

impl TwigcError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TwigcError::UsageError(_)
            | TwigcError::ConfigError(_)
            | TwigcError::RenderError(_)
            | TwigcError::IoError(_)
            | TwigcError::NoTemplate => exit_codes::FAILURE,
        }
    }
}

impl From<minijinja::Error> for TwigcError {
    fn from(err: minijinja::Error) -> Self {
        // The alternate form appends template source context on extra lines;
        // diagnostics are a single line.
        let message = err.to_string();
        let first = message.lines().next().unwrap_or_default();
        TwigcError::RenderError(first.to_string())
    }
}

/// Result type alias for twigc operations.
pub type Result<T> = std::result::Result<T, TwigcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_exits_with_failure() {
        let errors = [
            TwigcError::UsageError("bad argument".to_string()),
            TwigcError::ConfigError("bad config".to_string()),
            TwigcError::RenderError("template not found".to_string()),
            TwigcError::IoError("broken pipe".to_string()),
            TwigcError::NoTemplate,
        ];
        for err in errors {
            assert_eq!(err.exit_code(), exit_codes::FAILURE);
        }
    }

    #[test]
    fn error_messages_are_verbatim() {
        let err = TwigcError::UsageError("Illegal key=value pair: foo".to_string());
        assert_eq!(err.to_string(), "Illegal key=value pair: foo");
    }

    #[test]
    fn engine_errors_collapse_to_one_line() {
        let err = minijinja::Error::new(
            minijinja::ErrorKind::TemplateNotFound,
            "template \"b.twig\" does not exist",
        );
        let converted = TwigcError::from(err);
        assert!(matches!(converted, TwigcError::RenderError(_)));
        assert!(!converted.to_string().contains('\n'));
        assert!(converted.to_string().contains("b.twig"));
    }
}
