//! Wizard session state.
//!
//! [`ProjectInputs`] holds what the operator typed, [`DerivedPaths`] holds the
//! directories computed from it. Both are built once per run and dropped after
//! the project files are written.

use chrono::Local;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix appended to the project name to form the git directory name.
pub const GIT_DIR_SUFFIX: &str = "_git";

/// Values collected from the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInputs {
    /// Project name, usually of the form `j_doe_00_00`.
    pub project: String,
    /// Absolute, normalized project top directory.
    pub top_dir: PathBuf,
    /// Batch accounting project the jobs are charged to.
    pub uppmax_project_id: String,
    /// Address for batch job notifications.
    pub mail_user: String,
}

/// Directories computed from the top directory and project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPaths {
    pub git_dir: PathBuf,
    pub sbatch_dir: PathBuf,
    pub log_dir: PathBuf,
    pub sphinx_dir: PathBuf,
    pub intermediate_dir: PathBuf,
}

impl DerivedPaths {
    /// Compute every derived directory. Pure and deterministic.
    pub fn derive(top_dir: &Path, project: &str) -> Self {
        let git_dir = git_dir_for(top_dir, project);
        Self {
            sphinx_dir: git_dir.join("doc"),
            git_dir,
            sbatch_dir: top_dir.join("sbatch"),
            log_dir: top_dir.join("log"),
            intermediate_dir: top_dir.join("intermediate").join("nobackup"),
        }
    }

    /// Directories created before the project files are written, in creation order.
    pub fn directories_to_create(&self) -> [&Path; 4] {
        [
            self.git_dir.as_path(),
            self.sbatch_dir.as_path(),
            self.log_dir.as_path(),
            self.sphinx_dir.as_path(),
        ]
    }
}

/// The git directory for a project: `<top_dir>/<project>_git`.
pub fn git_dir_for(top_dir: &Path, project: &str) -> PathBuf {
    top_dir.join(format!("{}{}", project, GIT_DIR_SUFFIX))
}

/// A finished session: operator inputs, derived paths, and the render timestamp.
#[derive(Debug, Clone)]
pub struct Session {
    pub inputs: ProjectInputs,
    pub paths: DerivedPaths,
    pub now: String,
}

impl Session {
    /// Build the session, deriving paths and capturing the current local time.
    pub fn new(inputs: ProjectInputs) -> Self {
        Self::with_timestamp(inputs, format_now())
    }

    /// Build the session with a fixed timestamp.
    pub fn with_timestamp(inputs: ProjectInputs, now: impl Into<String>) -> Self {
        let paths = DerivedPaths::derive(&inputs.top_dir, &inputs.project);
        Self {
            inputs,
            paths,
            now: now.into(),
        }
    }
}

/// Current local time in `asctime` form, e.g. `Mon Oct 19 14:03:11 2026`.
pub fn format_now() -> String {
    Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
}

/// Make `input` absolute against the current directory and remove `.` and
/// `..` components lexically. Symlinks are not resolved.
pub fn normalize_top_dir(input: &str) -> io::Result<PathBuf> {
    let path = Path::new(input);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(path_clean::clean(absolute))
}
