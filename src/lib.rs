//! timesub substitutes timestamps into compiled infrastructure templates.
//! It runs as a lifecycle hook of a deployment host, replacing two marker
//! patterns with the build time in a compact and a long form.

/// Command-line interface module
pub mod cli;

/// Time sources, real and fixed
pub mod clock;

/// Service configuration handling
/// Supports JSON and YAML formats (serverless.yml, serverless.yaml, serverless.json)
pub mod config;

/// Common constants: default patterns, lifecycle event, config file names
pub mod constants;

/// Error types and handling
pub mod error;

/// Compact and long timestamp rendering
pub mod format;

/// The lifecycle hook table and the plugin behind it
pub mod hooks;

/// The deployment host seam
pub mod host;

pub mod logger;

/// Short and long pattern resolution
pub mod patterns;

/// File-backed host driven by the command line
pub mod runner;

/// Serialize, replace, parse
pub mod substitutor;
