//! Time sources for substitution.

use chrono::{DateTime, FixedOffset, Local};

/// Source of the instant substituted into a template.
pub trait Clock {
    /// Returns the current instant together with the offset it is rendered in.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<FixedOffset>,
{
    fn now(&self) -> DateTime<FixedOffset> {
        self()
    }
}
