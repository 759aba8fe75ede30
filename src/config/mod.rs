//! Configuration model for nocommit.
//!
//! This module defines the Config struct that represents `.nocommit.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults matching the stock hook, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::CONFIG_FILE_NAME;
pub use types::ReportMode;
