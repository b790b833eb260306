//! Command-line interface implementation for timesub.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for timesub.
#[derive(Parser, Debug)]
#[command(author, version, about = "timesub: substitutes timestamps into compiled CloudFormation templates", long_about = None)]
pub struct Args {
    /// Path to the compiled CloudFormation template (JSON)
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Service configuration file holding custom.timeSubstitution.
    /// Defaults to serverless.yml, serverless.yaml or serverless.json
    /// in the current directory, when present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pattern replaced by the compact timestamp, overriding the configuration
    #[arg(long, value_name = "REGEX")]
    pub pattern_short: Option<String>,

    /// Pattern replaced by the long timestamp, overriding the configuration
    #[arg(long, value_name = "REGEX")]
    pub pattern_long: Option<String>,

    /// Substitute this RFC 3339 instant instead of the current time
    #[arg(long, value_name = "RFC3339")]
    pub time: Option<String>,

    /// Write the result here instead of overwriting TEMPLATE
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                if let Err(err) = print_usage() {
                    eprintln!("{}", err);
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

/// Prints the help text shown when required arguments are missing.
pub fn print_usage() -> std::io::Result<()> {
    Args::command()
        .help_template(
            r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
        )
        .print_help()
}
