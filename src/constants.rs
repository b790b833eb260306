//! Common constants used throughout timesub.

/// Default pattern for the compact `YYYYMMDDhhmmss` timestamp
pub const DEFAULT_PATTERN_SHORT: &str = "##time##";

/// Default pattern for the long human-readable timestamp
pub const DEFAULT_PATTERN_LONG: &str = "##time_long##";

/// Lifecycle event the substitution is bound to: the template is fully
/// assembled but not yet written out.
pub const HOOK: &str = "after:aws:package:finalize:mergeCustomProviderResources";

/// Service configuration files looked up in the working directory
pub const CONFIG_FILES: [&str; 3] = ["serverless.yml", "serverless.yaml", "serverless.json"];
