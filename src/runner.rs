//! Command-line host: loads a service configuration and a compiled template
//! from disk, fires the substitution hook and writes the template back.

use crate::cli::Args;
use crate::clock::FixedClock;
use crate::config::{find_config, load_config, CustomConfig, ServiceConfig, TimeSubstitutionConfig};
use crate::constants::{CONFIG_FILES, HOOK};
use crate::error::{Error, Result};
use crate::hooks::TimeSubstitutionPlugin;
use crate::host::ServiceHost;
use chrono::{DateTime, FixedOffset};
use log::debug;
use std::path::{Path, PathBuf};

/// Reads a compiled template.
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
/// * `Error::ConfigError` if it is not JSON
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    debug!("Loading template from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    serde_json::from_str(&content).map_err(|e| {
        Error::ConfigError(format!("Invalid template '{}': {}", path.display(), e))
    })
}

/// Writes a template pretty-printed, with a trailing newline.
pub fn write_template<P: AsRef<Path>>(path: P, template: &serde_json::Value) -> Result<()> {
    let mut content =
        serde_json::to_string_pretty(template).map_err(Error::SerializationError)?;
    content.push('\n');
    std::fs::write(path, content).map_err(Error::IoError)
}

/// Parses an RFC 3339 instant, keeping its offset.
pub fn parse_time(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|source| Error::TimestampError {
        value: value.to_string(),
        source,
    })
}

/// Applies per-slot command-line overrides on top of the loaded configuration.
pub fn apply_overrides(
    mut config: ServiceConfig,
    pattern_short: Option<String>,
    pattern_long: Option<String>,
) -> ServiceConfig {
    if pattern_short.is_none() && pattern_long.is_none() {
        return config;
    }
    let custom = config.custom.get_or_insert_with(CustomConfig::default);
    let time_substitution = custom
        .time_substitution
        .get_or_insert_with(TimeSubstitutionConfig::default);
    if pattern_short.is_some() {
        time_substitution.pattern_short = pattern_short;
    }
    if pattern_long.is_some() {
        time_substitution.pattern_long = pattern_long;
    }
    config
}

/// Runs the whole substitution for the given arguments.
///
/// # Returns
/// * `Result<PathBuf>` - Path the substituted template was written to
///
/// # Flow
/// 1. Loads the service configuration, if any
/// 2. Loads the compiled template
/// 3. Builds the plugin, which resolves its patterns
/// 4. Fires the lifecycle hook
/// 5. Writes the template back
pub fn run(args: Args) -> Result<PathBuf> {
    let config_path = match args.config {
        Some(path) => Some(path),
        None => find_config(std::env::current_dir()?, &CONFIG_FILES),
    };
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => {
            debug!("No service configuration found, using default patterns");
            ServiceConfig::default()
        }
    };
    let config = apply_overrides(config, args.pattern_short, args.pattern_long);

    let template = load_template(&args.template)?;
    let mut host = ServiceHost::new(config, template);

    let mut plugin = TimeSubstitutionPlugin::new(&host)?;
    if let Some(time) = args.time.as_deref() {
        plugin = plugin.with_clock(FixedClock(parse_time(time)?));
    }
    plugin.run_hook(HOOK, &mut host)?;

    let output = args.output.unwrap_or(args.template);
    write_template(&output, &host.into_template())?;
    Ok(output)
}
