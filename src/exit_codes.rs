//! Exit code constants for the project-init wizard.
//!
//! - 0: Success, or the operator interrupted the wizard
//! - 1: User error (declined to pick a new top path, invalid config file)
//! - 2: Filesystem failure while creating directories or writing files
//! - 3: Template rendering failure

/// Successful execution (also used for an operator interrupt).
pub const SUCCESS: i32 = 0;

/// User error: no replacement top path after a conflict, or a bad config file.
pub const USER_ERROR: i32 = 1;

/// Filesystem failure: directory creation or file write failed.
pub const IO_FAILURE: i32 = 2;

/// Template failure: a placeholder could not be resolved.
pub const TEMPLATE_FAILURE: i32 = 3;
