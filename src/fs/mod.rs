//! Filesystem utilities for twigc.
//!
//! Staging of stdin templates into a scoped temporary directory, and search
//! directory checks.

mod staging;

pub use staging::{STAGED_TEMPLATE_NAME, StagedTemplate};

use crate::error::{Result, TwigcError};
use std::path::Path;

/// Require that `path` names an existing directory.
///
/// `what` names the option in the error, e.g. "search directory".
pub fn require_dir(path: &Path, what: &str) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(TwigcError::UsageError(format!(
            "Illegal {}: {}",
            what,
            path.display()
        )))
    }
}
