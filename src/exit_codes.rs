//! Exit code constants for the twigc CLI.
//!
//! twigc only distinguishes success from failure:
//! - 0: Success (including help, version and credits display)
//! - 1: Any usage, input, configuration or render error

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, invalid input data, configuration or render errors.
pub const FAILURE: i32 = 1;
