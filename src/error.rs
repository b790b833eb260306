//! Error handling for timesub.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors raised while resolving patterns or substituting a template.
#[derive(Error, Debug)]
pub enum Error {
    /// A configured pattern is not valid regular expression syntax
    #[error("Invalid {slot} pattern '{pattern}': {source}.")]
    PatternCompileError {
        slot: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The template text no longer parses as JSON after substitution
    #[error("Template corrupted by substitution: {0}.")]
    TemplateCorruptionError(#[source] serde_json::Error),

    /// The template could not be serialized to text
    #[error("Template serialization error: {0}.")]
    SerializationError(#[source] serde_json::Error),

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The service configuration or the template file is malformed
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A fixed instant given on the command line is not RFC 3339
    #[error("Invalid timestamp '{value}': {source}.")]
    TimestampError {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
