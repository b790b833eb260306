//! The deployment host seen from the substitution hook.

use crate::config::{ServiceConfig, TimeSubstitutionConfig};

/// What the hook needs from the system that owns the template.
pub trait Host {
    /// Pattern overrides from the service configuration, if present.
    fn time_substitution(&self) -> Option<&TimeSubstitutionConfig>;

    /// The compiled template as currently assembled.
    fn template(&self) -> &serde_json::Value;

    /// Replaces the compiled template.
    fn set_template(&mut self, template: serde_json::Value);

    /// Reports a message to the user.
    fn log(&self, message: &str);
}

/// A [`Host`] over an already loaded service configuration and template.
/// Messages go through the `log` facade.
#[derive(Debug, Clone, Default)]
pub struct ServiceHost {
    pub config: ServiceConfig,
    pub template: serde_json::Value,
}

impl ServiceHost {
    pub fn new(config: ServiceConfig, template: serde_json::Value) -> Self {
        Self { config, template }
    }

    pub fn into_template(self) -> serde_json::Value {
        self.template
    }
}

impl Host for ServiceHost {
    fn time_substitution(&self) -> Option<&TimeSubstitutionConfig> {
        self.config.time_substitution()
    }

    fn template(&self) -> &serde_json::Value {
        &self.template
    }

    fn set_template(&mut self, template: serde_json::Value) {
        self.template = template;
    }

    fn log(&self, message: &str) {
        log::info!("{}", message);
    }
}
