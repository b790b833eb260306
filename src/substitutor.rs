//! The substitution itself: serialize, replace, parse.
//!
//! Matching runs over the serialized text rather than over tree nodes, so a
//! custom pattern may span keys, values and punctuation alike.

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::format::{format_compact, format_long};
use crate::patterns::PatternPair;
use regex::NoExpand;

/// Replaces every match of both patterns in `document` with the current
/// time, returning the new document.
///
/// The clock is read once so both renderings describe the same instant. The
/// short pattern is applied before the long one; what happens when custom
/// patterns overlap is not defined beyond that order.
///
/// # Arguments
/// * `document` - Template to substitute, left untouched
/// * `patterns` - Resolved short and long matchers
/// * `clock` - Source of the substituted instant
/// * `log` - Sink for the two diagnostic messages
///
/// # Errors
/// * `Error::SerializationError` if the document cannot be serialized
/// * `Error::TemplateCorruptionError` if the replaced text is no longer JSON
pub fn substitute(
    document: &serde_json::Value,
    patterns: &PatternPair,
    clock: &dyn Clock,
    log: &dyn Fn(&str),
) -> Result<serde_json::Value> {
    let time = clock.now();
    let short_value = format_compact(&time);
    let long_value = format_long(&time);

    log(&format!(
        "Substituting '{}' to '{}' in cloudformation template",
        patterns.short, short_value
    ));
    log(&format!(
        "Substituting '{}' to '{}' in cloudformation template",
        patterns.long, long_value
    ));

    let serialized = serde_json::to_string(document).map_err(Error::SerializationError)?;
    let replaced = patterns
        .short
        .replace_all(&serialized, NoExpand(&short_value));
    let replaced = patterns.long.replace_all(&replaced, NoExpand(&long_value));

    serde_json::from_str(&replaced).map_err(Error::TemplateCorruptionError)
}
