//! CLI argument parsing for project-init.
//!
//! The wizard takes no arguments; clap supplies `--help` and `--version`.
//! Batch defaults can be changed through the file named by
//! `PROJECT_INIT_CONFIG`.

use clap::Parser;

/// Interactive setup of a new analysis project.
///
/// Asks for a project name, top directory, batch project id and mail address,
/// then creates the project directories and writes `pavement.py`,
/// `sbatch_template` and `proj_conf.yaml` into `<top>/<project>_git/`.
#[derive(Parser, Debug)]
#[command(name = "project-init")]
#[command(author, version, about, long_about)]
pub struct Cli {}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
