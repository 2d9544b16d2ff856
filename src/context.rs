//! Process context for a single twigc invocation.
//!
//! Everything twigc would otherwise read from process globals (environment
//! variables, standard input, whether standard input is a terminal, the
//! temporary directory root) is captured here once and passed explicitly to
//! the input resolver and the render step. Tests build a context by hand
//! instead of mutating the real process state.

use crate::error::{Result, TwigcError};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

/// Name used as the diagnostic prefix and in version output.
pub const PROGRAM_NAME: &str = "twigc";

/// Captured process state for one run.
pub struct RunContext {
    /// Environment variables visible to the program, in process order.
    pub env: Vec<(String, String)>,

    /// Whether standard input is attached to a terminal.
    pub stdin_is_terminal: bool,

    /// Directory under which staged templates are created.
    pub temp_root: PathBuf,

    stdin: Box<dyn Read>,
}

impl RunContext {
    /// Capture the real process state.
    ///
    /// Environment entries whose name or value is not valid Unicode are
    /// skipped; they could never be legal template variable names or values.
    pub fn from_process() -> Self {
        let env = std::env::vars_os()
            .filter_map(|(k, v)| match (k.into_string(), v.into_string()) {
                (Ok(k), Ok(v)) => Some((k, v)),
                (k, _) => {
                    tracing::debug!(name = ?k, "skipping non-unicode environment entry");
                    None
                }
            })
            .collect();

        let stdin = io::stdin();
        Self {
            env,
            stdin_is_terminal: stdin.is_terminal(),
            temp_root: std::env::temp_dir(),
            stdin: Box::new(stdin),
        }
    }

    /// Build a context around an arbitrary reader, with an empty environment.
    #[cfg(test)]
    pub fn new<R: Read + 'static>(stdin: R) -> Self {
        Self {
            env: Vec::new(),
            stdin_is_terminal: false,
            temp_root: std::env::temp_dir(),
            stdin: Box::new(stdin),
        }
    }

    /// Replace the captured environment.
    #[cfg(test)]
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Mark standard input as attached (or not) to a terminal.
    #[cfg(test)]
    pub fn with_terminal_stdin(mut self, is_terminal: bool) -> Self {
        self.stdin_is_terminal = is_terminal;
        self
    }

    /// Use a different root directory for staged templates.
    #[cfg(test)]
    pub fn with_temp_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.temp_root = root.into();
        self
    }

    /// Read all of standard input as UTF-8 text.
    pub fn read_stdin(&mut self) -> Result<String> {
        let mut buf = String::new();
        self.stdin
            .read_to_string(&mut buf)
            .map_err(|e| TwigcError::IoError(format!("failed to read stdin: {}", e)))?;
        tracing::trace!(bytes = buf.len(), "read stdin");
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn new_context_has_empty_env() {
        let ctx = RunContext::new(Cursor::new(""));
        assert!(ctx.env.is_empty());
        assert!(!ctx.stdin_is_terminal);
    }

    #[test]
    fn with_env_replaces_environment() {
        let ctx = RunContext::new(Cursor::new("")).with_env([("HOME", "/home/me"), ("A", "1")]);
        assert_eq!(
            ctx.env,
            vec![
                ("HOME".to_string(), "/home/me".to_string()),
                ("A".to_string(), "1".to_string())
            ]
        );
    }

    #[test]
    fn read_stdin_returns_content_once() {
        let mut ctx = RunContext::new(Cursor::new("hello {{ name }}\n"));
        assert_eq!(ctx.read_stdin().unwrap(), "hello {{ name }}\n");
        assert_eq!(ctx.read_stdin().unwrap(), "");
    }

    #[test]
    fn read_stdin_rejects_invalid_utf8() {
        let mut ctx = RunContext::new(Cursor::new(vec![0xff, 0xfe]));
        let err = ctx.read_stdin().unwrap_err();
        assert!(matches!(err, TwigcError::IoError(_)));
    }
}
