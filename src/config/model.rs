//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for twigc.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Input settings
    // =========================================================================
    /// Whether process environment variables may be used as input data (`-E`).
    #[serde(default = "default_true")]
    pub expose_env: bool,

    // =========================================================================
    // Render settings
    // =========================================================================
    /// Treat undefined variables as errors even without `-s`.
    #[serde(default)]
    pub strict: bool,

    /// Escape strategy token used when `-e` is not given.
    #[serde(default)]
    pub escape: Option<String>,

    /// Extra search directories, searched after any given with `-d`.
    #[serde(default)]
    pub search_dirs: Vec<PathBuf>,

    /// Cache directory used when `--cache` is not given.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expose_env: true,
            strict: false,
            escape: None,
            search_dirs: Vec::new(),
            cache_dir: None,
        }
    }
}
