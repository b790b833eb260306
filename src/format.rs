//! Timestamp rendering for the two substitution slots.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

/// Renders `time` as `YYYYMMDDhhmmss` in its own offset.
///
/// # Example
/// 1980-01-31T12:30:16 becomes `19800131123016`.
pub fn format_compact(time: &DateTime<FixedOffset>) -> String {
    format!(
        "{}{}{}{}{}{}",
        time.year(),
        pad(time.month()),
        pad(time.day()),
        pad(time.hour()),
        pad(time.minute()),
        pad(time.second())
    )
}

/// Renders `time` in the long human-readable form, for example
/// `Thu Jan 31 1980 12:30:16 GMT-0600 (GMT-06:00)`.
///
/// The zone is named after its offset since a [`FixedOffset`] carries no
/// zone name.
pub fn format_long(time: &DateTime<FixedOffset>) -> String {
    time.format("%a %b %d %Y %H:%M:%S GMT%z (GMT%:z)").to_string()
}

fn pad(number: u32) -> String {
    if number < 10 {
        format!("0{}", number)
    } else {
        number.to_string()
    }
}
