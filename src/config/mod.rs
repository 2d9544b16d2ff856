//! Configuration model for twigc.
//!
//! An optional YAML file (passed with `--config`) supplies defaults for the
//! render options. Unknown fields are ignored and every field has a default,
//! so an empty file is a valid configuration. Command-line flags always win.

mod model;
mod operations;


// Re-export public API
pub use model::Config;
