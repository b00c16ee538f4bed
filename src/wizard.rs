//! The interactive setup flow.
//!
//! 1. Ask for the project name and top path
//! 2. Refuse a top path whose git directory already has a `pavement.py`,
//!    asking for another one until the operator gives up
//! 3. Ask for the batch project id and mail address
//! 4. Create the directories and write the project files
//! 5. Log a setup event and print where the documentation root is

use crate::config::Config;
use crate::error::{InitError, Result};
use crate::events::{Event, EventAction, append_event};
use crate::interrupt::INTERRUPT;
use crate::prompt::validators::{existing_path, nonempty};
use crate::prompt::{Prompter, TermEncoding};
use crate::scaffold::{create_directories, has_existing_descriptor, write_project_files};
use crate::session::{ProjectInputs, Session, git_dir_for, normalize_top_dir};
use crate::template::PAVEMENT_FILE_NAME;
use colored::Colorize;
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HEADING: &str = "project-init configuration";

const PROJECT_HELP: &str = "
The project name is usually of the form j_doe_00_00, but can be any name. \
This name will be used to generate a directory where the pavement.py file is installed
";

const TOP_DIR_HELP: &str = "
The top path defines the root of the project. Relative to this path there should be \
a data directory with raw data, an intermediate directory with intermediate data analyses. \
project-init will set up a directory for the pavement.py file, an sbatch directory for \
sbatch files, and a log directory for logging.
";

/// Run the wizard on the process terminal.
pub fn run() -> Result<()> {
    let config = Config::resolve()?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout(), TermEncoding::from_env());
    run_with(&mut prompter, &config).map(|_| ())
}

/// Run the wizard over an arbitrary prompter, returning the finished session.
pub fn run_with<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &Config,
) -> Result<Session> {
    prompter.say(&HEADING.bold().to_string())?;
    prompter.say("")?;

    prompter.say(PROJECT_HELP)?;
    let project = prompter.ask("Project name", None, nonempty)?;

    prompter.say(TOP_DIR_HELP)?;
    let answer = prompter.ask("top path for the project", Some("."), existing_path)?;
    let top_dir = choose_top_dir(prompter, &project, answer)?;

    let uppmax_project_id = prompter.ask(
        "which uppmax project id is this project related to? used in the template sbatch file",
        None,
        nonempty,
    )?;
    let mail_user = prompter.ask("what is your mail address?", None, nonempty)?;

    let session = Session::new(ProjectInputs {
        project,
        top_dir,
        uppmax_project_id,
        mail_user,
    });

    create_directories(&session.paths)?;
    let written = write_project_files(&session, config, &INTERRUPT)?;
    log_setup(&session, &written);

    prompter.say(&format!(
        "Done setting up the project. Please run 'sphinx-quickstart' in {} if you haven't done so yet",
        session.paths.sphinx_dir.display()
    ))?;

    Ok(session)
}

/// Normalize the top path, re-asking while it would clobber an existing descriptor.
fn choose_top_dir<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    project: &str,
    answer: String,
) -> Result<PathBuf> {
    let mut top_dir = absolute_top_dir(&answer)?;

    while has_existing_descriptor(&git_dir_for(&top_dir, project)) {
        prompter.say("")?;
        prompter.say(
            &format!(
                "Error: an existing {} has been found in the selected project top directory path.",
                PAVEMENT_FILE_NAME
            )
            .bold()
            .to_string(),
        )?;
        prompter.say(&format!(
            "will not overwrite existing {} files.",
            PAVEMENT_FILE_NAME
        ))?;
        prompter.say("")?;

        let answer = prompter.ask(
            "Please enter a new top path (or just Enter to exit)",
            None,
            existing_path,
        )?;
        if answer.is_empty() {
            return Err(InitError::Declined);
        }
        top_dir = absolute_top_dir(&answer)?;
    }

    Ok(top_dir)
}

fn absolute_top_dir(answer: &str) -> Result<PathBuf> {
    normalize_top_dir(answer).map_err(|e| InitError::io("failed to resolve top path", answer, e))
}

fn log_setup(session: &Session, written: &[PathBuf]) {
    let paths = &session.paths;
    let files: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
    let event = Event::new(EventAction::Setup, &session.inputs.project).with_details(json!({
        "top_dir": session.inputs.top_dir.display().to_string(),
        "git_dir": paths.git_dir.display().to_string(),
        "sbatch_dir": paths.sbatch_dir.display().to_string(),
        "log_dir": paths.log_dir.display().to_string(),
        "sphinx_dir": paths.sphinx_dir.display().to_string(),
        "intermediate_dir": paths.intermediate_dir.display().to_string(),
        "uppmax_project_id": session.inputs.uppmax_project_id,
        "files": files,
    }));

    if let Err(e) = append_event(&paths.log_dir, &event) {
        eprintln!("Warning: failed to log setup event: {}", e);
    }
}
