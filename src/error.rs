//! Error types for the project-init wizard.
//!
//! Uses thiserror for derive macros. Prompt validation failures are not part
//! of this type: they are handled inside the prompt loop and never escape it.

use crate::exit_codes;
use crate::template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wizard operations.
#[derive(Error, Debug)]
pub enum InitError {
    /// Standard input was closed while a prompt was waiting.
    #[error("interrupted")]
    Interrupted,

    /// The operator gave no replacement top path after a conflict.
    #[error("no new top path given, nothing was written")]
    Declined,

    /// A template could not be rendered.
    #[error("template '{name}' failed to render: {source}")]
    Template {
        name: &'static str,
        #[source]
        source: TemplateError,
    },

    /// Filesystem or terminal I/O failed.
    #[error("{context} '{}': {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[source] std::io::Error),

    /// The config file could not be read or is invalid.
    #[error("{0}")]
    Config(String),
}

impl InitError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InitError::Io {
            context,
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            InitError::Interrupted => exit_codes::SUCCESS,
            InitError::Declined => exit_codes::USER_ERROR,
            InitError::Config(_) => exit_codes::USER_ERROR,
            InitError::Io { .. } => exit_codes::IO_FAILURE,
            InitError::Terminal(_) => exit_codes::IO_FAILURE,
            InitError::Template { .. } => exit_codes::TEMPLATE_FAILURE,
        }
    }
}

/// Result type alias for wizard operations.
pub type Result<T> = std::result::Result<T, InitError>;
