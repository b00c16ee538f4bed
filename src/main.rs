//! project-init: interactive scaffolding for batch-computing analysis projects.
//!
//! This is the entry point for the `project-init` CLI. It installs the
//! interrupt handler, runs the wizard, and maps errors to exit codes.

mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod interrupt;
pub mod prompt;
pub mod scaffold;
pub mod session;
pub mod template;
mod wizard;

#[cfg(test)]
mod test_support;

use cli::Cli;
use error::InitError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _cli = Cli::parse_args();

    if let Err(e) = interrupt::install() {
        eprintln!("Warning: failed to install interrupt handler: {}", e);
    }

    match wizard::run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(InitError::Interrupted) => {
            interrupt::print_interrupted();
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
