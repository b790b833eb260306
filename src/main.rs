//! timesub's application entry point.

use timesub::{
    cli::get_args,
    error::default_error_handler,
    logger::init_logger,
    runner::run,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    match run(args) {
        Ok(output) => println!("Timestamps substituted in '{}'.", output.display()),
        Err(err) => default_error_handler(err),
    }
}
