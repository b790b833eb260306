use chrono::{DateTime, FixedOffset, TimeZone};
use std::cell::RefCell;
use timesub::config::TimeSubstitutionConfig;
use timesub::host::Host;

/// 1980-01-31T12:30:16 at UTC-6.
pub fn fixed_instant() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(6 * 3600)
        .unwrap()
        .with_ymd_and_hms(1980, 1, 31, 12, 30, 16)
        .unwrap()
}

/// Host that keeps its log messages for inspection.
#[derive(Default)]
pub struct RecordingHost {
    pub config: Option<TimeSubstitutionConfig>,
    pub template: serde_json::Value,
    pub messages: RefCell<Vec<String>>,
}

impl RecordingHost {
    pub fn new(config: Option<TimeSubstitutionConfig>, template: serde_json::Value) -> Self {
        Self { config, template, messages: RefCell::new(Vec::new()) }
    }
}

impl Host for RecordingHost {
    fn time_substitution(&self) -> Option<&TimeSubstitutionConfig> {
        self.config.as_ref()
    }

    fn template(&self) -> &serde_json::Value {
        &self.template
    }

    fn set_template(&mut self, template: serde_json::Value) {
        self.template = template;
    }

    fn log(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
