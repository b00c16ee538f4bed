//! Project skeleton creation.
//!
//! # What gets created
//!
//! 1. The git, sbatch, log and documentation directories (if missing)
//! 2. `pavement.py`, `sbatch_template` and `proj_conf.yaml` in the git directory
//!
//! All three files are rendered before the first one is written, so a
//! template failure leaves no files behind. A write failure partway through
//! leaves the files already written in place.

#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::error::{InitError, Result};
use crate::fs::{ensure_dir, write_file};
use crate::interrupt::Interrupt;
use crate::session::{DerivedPaths, Session};
use crate::template::{
    PAVEMENT_FILE_NAME, PAVEMENT_PY, PROJ_CONF_FILE_NAME, PROJ_CONF_YAML, SBATCH_TEMPLATE,
    SBATCH_TEMPLATE_FILE_NAME, SbatchJob, pavement_vars, proj_conf_vars, render_sbatch,
    render_template,
};
use std::path::{Path, PathBuf};

/// Whether `git_dir` already holds a generated build descriptor.
///
/// Only the descriptor is checked; the other two files are overwritten freely.
pub fn has_existing_descriptor(git_dir: &Path) -> bool {
    git_dir.join(PAVEMENT_FILE_NAME).is_file()
}

/// Create the project directories, returning the ones that did not exist yet.
pub fn create_directories(paths: &DerivedPaths) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();
    for dir in paths.directories_to_create() {
        if ensure_dir(dir)? {
            created.push(dir.to_path_buf());
        }
    }
    Ok(created)
}

/// A rendered file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub name: &'static str,
    pub content: String,
}

/// Render the three project files.
///
/// The batch template is kept unrendered, since its job fields are filled per
/// job later; it is rendered once against the defaults to make sure every
/// placeholder in it has a source.
pub fn render_project_files(session: &Session, config: &Config) -> Result<Vec<RenderedFile>> {
    let pavement = render_template(PAVEMENT_PY, &pavement_vars(session, config)).map_err(
        |source| InitError::Template {
            name: PAVEMENT_FILE_NAME,
            source,
        },
    )?;

    render_sbatch(&SbatchJob::from_defaults(session, config)).map_err(|source| {
        InitError::Template {
            name: SBATCH_TEMPLATE_FILE_NAME,
            source,
        }
    })?;

    let proj_conf = render_template(PROJ_CONF_YAML, &proj_conf_vars(session, config))
        .map_err(|source| InitError::Template {
            name: PROJ_CONF_FILE_NAME,
            source,
        })?;

    Ok(vec![
        RenderedFile {
            name: PAVEMENT_FILE_NAME,
            content: pavement,
        },
        RenderedFile {
            name: SBATCH_TEMPLATE_FILE_NAME,
            content: SBATCH_TEMPLATE.to_string(),
        },
        RenderedFile {
            name: PROJ_CONF_FILE_NAME,
            content: proj_conf,
        },
    ])
}

/// Render and write the project files into the git directory.
///
/// The writes run inside a critical section of `interrupt`: an interrupt
/// stops the run between files, never inside one. Returns the paths written,
/// in order.
pub fn write_project_files(
    session: &Session,
    config: &Config,
    interrupt: &Interrupt,
) -> Result<Vec<PathBuf>> {
    let files = render_project_files(session, config)?;

    let section = interrupt.enter();
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        if section.interrupted() {
            return Err(InitError::Interrupted);
        }
        let path = session.paths.git_dir.join(file.name);
        write_file(&path, &file.content)?;
        written.push(path);
    }
    if section.interrupted() {
        return Err(InitError::Interrupted);
    }
    Ok(written)
}
