//! Configuration model for project-init.
//!
//! This module defines the optional YAML config that supplies the batch job
//! defaults written into the generated files. Unknown fields are ignored and
//! every field has a default, so an empty file is a valid config.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, SbatchDefaults};
pub use operations::CONFIG_ENV_VAR;
