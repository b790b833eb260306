//! Resolution of the short and long substitution patterns.

use crate::config::TimeSubstitutionConfig;
use crate::constants::{DEFAULT_PATTERN_LONG, DEFAULT_PATTERN_SHORT};
use crate::error::{Error, Result};
use regex::Regex;

/// The two compiled matchers. Every match of each is replaced, not just the
/// first.
#[derive(Debug, Clone)]
pub struct PatternPair {
    pub short: Regex,
    pub long: Regex,
}

/// Compiles the configured patterns, falling back to the defaults per slot.
/// An empty override counts as absent.
///
/// # Errors
/// * `Error::PatternCompileError` if an override is not a valid regex
pub fn resolve_patterns(config: Option<&TimeSubstitutionConfig>) -> Result<PatternPair> {
    let (short, long) = match config {
        Some(config) => (
            non_empty(config.pattern_short.as_deref()),
            non_empty(config.pattern_long.as_deref()),
        ),
        None => (None, None),
    };

    Ok(PatternPair {
        short: compile("short", short.unwrap_or(DEFAULT_PATTERN_SHORT))?,
        long: compile("long", long.unwrap_or(DEFAULT_PATTERN_LONG))?,
    })
}

fn non_empty(pattern: Option<&str>) -> Option<&str> {
    pattern.filter(|pattern| !pattern.is_empty())
}

fn compile(slot: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::PatternCompileError {
        slot,
        pattern: pattern.to_string(),
        source,
    })
}
