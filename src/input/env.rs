//! Environment variable input.

use super::VariableMapping;
use crate::config::Config;
use crate::context::RunContext;
use crate::error::{Result, TwigcError};

/// Collect the captured environment as variables.
///
/// Fails when the configuration hides the environment from templates.
pub fn collect(ctx: &RunContext, config: &Config) -> Result<VariableMapping> {
    if !config.expose_env {
        return Err(TwigcError::ConfigError(
            "config setting 'expose_env' must be enabled to use option 'env'".to_string(),
        ));
    }

    Ok(ctx
        .env
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect())
}
