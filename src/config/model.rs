//! Config struct definitions and default implementations.

use serde::{Deserialize, Serialize};

/// Configuration for the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Batch job defaults used in the build descriptor.
    pub sbatch: SbatchDefaults,

    /// Genome build written into the analysis configuration.
    #[serde(default = "default_genome_build")]
    pub genome_build: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sbatch: SbatchDefaults::default(),
            genome_build: default_genome_build(),
        }
    }
}

/// Static batch job settings that are not asked for interactively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SbatchDefaults {
    /// Scheduler partition (default: "node").
    #[serde(default = "default_partition")]
    pub partition: String,

    /// Wall-clock limit as `[D-]HH:MM:SS` (default: "50:00:00").
    #[serde(default = "default_time")]
    pub time: String,

    /// Mail notification event type (default: "ALL").
    #[serde(default = "default_mail_type")]
    pub mail_type: String,

    /// Cores per job (default: 8).
    #[serde(default = "default_cores")]
    pub cores: u32,

    /// Resource constraint; empty means no constraint line.
    #[serde(default)]
    pub constraint: String,
}

impl Default for SbatchDefaults {
    fn default() -> Self {
        Self {
            partition: default_partition(),
            time: default_time(),
            mail_type: default_mail_type(),
            cores: default_cores(),
            constraint: String::new(),
        }
    }
}

fn default_partition() -> String {
    "node".to_string()
}

fn default_time() -> String {
    "50:00:00".to_string()
}

fn default_mail_type() -> String {
    "ALL".to_string()
}

fn default_cores() -> u32 {
    8
}

fn default_genome_build() -> String {
    "hg19".to_string()
}
