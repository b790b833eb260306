//! The lifecycle hook the host fires once the template is assembled.

use crate::clock::{Clock, SystemClock};
use crate::constants::HOOK;
use crate::error::Result;
use crate::host::Host;
use crate::patterns::{resolve_patterns, PatternPair};
use crate::substitutor::substitute;
use indexmap::IndexMap;
use log::debug;

/// Handler bound to a lifecycle event.
pub type HookHandler = fn(&TimeSubstitutionPlugin, &mut dyn Host) -> Result<()>;

/// Substitutes timestamps into the host's compiled template.
pub struct TimeSubstitutionPlugin {
    patterns: PatternPair,
    clock: Box<dyn Clock>,
}

impl TimeSubstitutionPlugin {
    /// Resolves the patterns from the host's configuration.
    ///
    /// # Errors
    /// * `Error::PatternCompileError` if a configured pattern is invalid
    pub fn new(host: &dyn Host) -> Result<Self> {
        let patterns = resolve_patterns(host.time_substitution())?;
        debug!(
            "Resolved patterns: short '{}', long '{}'",
            patterns.short, patterns.long
        );
        Ok(Self { patterns, clock: Box::new(SystemClock) })
    }

    /// Replaces the clock, typically with a fixed one.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn patterns(&self) -> &PatternPair {
        &self.patterns
    }

    /// Event names mapped to the handlers the host should call.
    pub fn hooks(&self) -> IndexMap<&'static str, HookHandler> {
        let mut hooks: IndexMap<&'static str, HookHandler> = IndexMap::new();
        hooks.insert(HOOK, Self::handle);
        hooks
    }

    /// Substitutes the host's template and writes the result back.
    /// On error the host's template is left as it was.
    pub fn handle(&self, host: &mut dyn Host) -> Result<()> {
        let template = {
            let host: &dyn Host = host;
            substitute(host.template(), &self.patterns, &*self.clock, &|message| {
                host.log(message)
            })?
        };
        host.set_template(template);
        Ok(())
    }

    /// Fires `event` if a handler is registered for it.
    ///
    /// # Returns
    /// * `Result<bool>` - Whether a handler ran
    pub fn run_hook(&self, event: &str, host: &mut dyn Host) -> Result<bool> {
        match self.hooks().get(event) {
            Some(handler) => {
                debug!("Running hook '{}'", event);
                handler(self, host)?;
                Ok(true)
            }
            None => {
                debug!("No hook registered for '{}'", event);
                Ok(false)
            }
        }
    }
}
