//! Service configuration handling.
//! Reads the `custom.timeSubstitution` block of a service configuration file,
//! ignoring every other key.

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Pattern overrides, both independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSubstitutionConfig {
    #[serde(default)]
    pub pattern_short: Option<String>,
    #[serde(default)]
    pub pattern_long: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomConfig {
    #[serde(default)]
    pub time_substitution: Option<TimeSubstitutionConfig>,
}

/// The parts of a service configuration timesub cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub custom: Option<CustomConfig>,
}

impl ServiceConfig {
    /// Returns the `custom.timeSubstitution` block, if any level of it is set.
    pub fn time_substitution(&self) -> Option<&TimeSubstitutionConfig> {
        self.custom.as_ref().and_then(|custom| custom.time_substitution.as_ref())
    }
}

/// Finds the first existing configuration file in `dir`.
///
/// # Arguments
/// * `dir` - Directory to search
/// * `config_files` - Candidate file names, in order of preference
pub fn find_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Option<PathBuf> {
    config_files
        .iter()
        .map(|file| dir.as_ref().join(file))
        .find(|path| path.exists())
}

/// Loads and parses a service configuration file.
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
/// * `Error::ConfigError` if it is neither valid JSON nor valid YAML
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    parse_config(&content)
}

/// Parses configuration content, trying JSON first and YAML second.
pub fn parse_config(content: &str) -> Result<ServiceConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str::<Option<ServiceConfig>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}
