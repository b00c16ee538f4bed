//! Config loading and validation.

use super::model::Config;
use crate::error::{InitError, Result};
use std::path::Path;

/// Environment variable naming an optional config file.
pub const CONFIG_ENV_VAR: &str = "PROJECT_INIT_CONFIG";

impl Config {
    /// Load the config named by `PROJECT_INIT_CONFIG`, or the defaults if it is unset.
    pub fn resolve() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            InitError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml reads an empty document as null rather than an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| InitError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `sbatch.cores` must be positive
    /// - `sbatch.time` must look like `[D-]HH:MM:SS`
    /// - `sbatch.partition`, `sbatch.mail_type` and `genome_build` must be non-empty
    pub fn validate(&self) -> Result<()> {
        let sbatch = &self.sbatch;

        if sbatch.cores == 0 {
            return Err(InitError::Config(
                "config validation failed: sbatch.cores must be greater than 0".to_string(),
            ));
        }

        if !is_wall_clock_time(&sbatch.time) {
            return Err(InitError::Config(format!(
                "config validation failed: sbatch.time must look like HH:MM:SS or D-HH:MM:SS (found '{}')",
                sbatch.time
            )));
        }

        for (field, value) in [
            ("sbatch.partition", &sbatch.partition),
            ("sbatch.mail_type", &sbatch.mail_type),
            ("genome_build", &self.genome_build),
        ] {
            if value.trim().is_empty() {
                return Err(InitError::Config(format!(
                    "config validation failed: {} must be non-empty",
                    field
                )));
            }
        }

        Ok(())
    }
}

fn is_wall_clock_time(value: &str) -> bool {
    let clock = match value.split_once('-') {
        Some((days, clock)) => {
            if days.is_empty() || !days.bytes().all(|b| b.is_ascii_digit()) {
                return false;
            }
            clock
        }
        None => value,
    };

    let parts: Vec<&str> = clock.split(':').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}
