//! Satchel CLI entry point.

use std::process::ExitCode;

use satchel_runtime::Repl;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr and only at `warn` and above, so stdout carries
/// nothing but the game.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut repl = Repl::new()?;
    repl.run()?;
    Ok(())
}
