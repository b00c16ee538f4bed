//! Rendering of the generated project files.
//!
//! The three file bodies live in [`bodies`] as static text. Variable maps are
//! built here from the finished [`Session`] and the batch defaults in
//! [`Config`], so every placeholder a body uses has a typed source. Values are
//! escaped for the format of the file they are rendered into.

mod bodies;
mod escape;
mod render;

pub use bodies::{
    PAVEMENT_FILE_NAME, PAVEMENT_PY, PROJ_CONF_FILE_NAME, PROJ_CONF_YAML,
    SBATCH_TEMPLATE, SBATCH_TEMPLATE_FILE_NAME,
};
pub use escape::{python_str, yaml_scalar};
pub use render::{TemplateError, render_template, vars};

use crate::config::Config;
use crate::session::Session;
use std::collections::HashMap;

/// Variables for `pavement.py`, escaped for Python string literals.
pub fn pavement_vars(session: &Session, config: &Config) -> HashMap<String, String> {
    escape_values(project_vars(session, config), python_str)
}

/// Variables for `proj_conf.yaml`, rendered as YAML scalars.
pub fn proj_conf_vars(session: &Session, config: &Config) -> HashMap<String, String> {
    escape_values(project_vars(session, config), yaml_scalar)
}

fn escape_values(
    vars: HashMap<String, String>,
    escape: fn(&str) -> String,
) -> HashMap<String, String> {
    vars.into_iter()
        .map(|(name, value)| (name, escape(&value)))
        .collect()
}

/// Unescaped variables shared by the build descriptor and analysis configuration.
pub fn project_vars(session: &Session, config: &Config) -> HashMap<String, String> {
    let paths = &session.paths;
    let sbatch = &config.sbatch;
    vars([
        ("project", session.inputs.project.clone()),
        ("now", session.now.clone()),
        ("top_dir", session.inputs.top_dir.display().to_string()),
        ("git_dir", paths.git_dir.display().to_string()),
        ("sbatch_dir", paths.sbatch_dir.display().to_string()),
        ("log_dir", paths.log_dir.display().to_string()),
        ("sphinx_dir", paths.sphinx_dir.display().to_string()),
        ("intermediate_dir", paths.intermediate_dir.display().to_string()),
        ("uppmax_project_id", session.inputs.uppmax_project_id.clone()),
        ("mail_user", session.inputs.mail_user.clone()),
        ("partition", sbatch.partition.clone()),
        ("time", sbatch.time.clone()),
        ("mail_type", sbatch.mail_type.clone()),
        ("cores", sbatch.cores.to_string()),
        ("constraint", sbatch.constraint.clone()),
        ("genome_build", config.genome_build.clone()),
        ("sbatch_template", SBATCH_TEMPLATE_FILE_NAME.to_string()),
    ])
}

/// Parameters of a single batch job, as filled into [`SBATCH_TEMPLATE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbatchJob {
    pub project_id: String,
    pub time: String,
    pub jobname: String,
    pub workdir: String,
    pub partition: String,
    pub cores: u32,
    pub mail_type: String,
    pub mail_user: String,
    /// Resource constraint; the `#SBATCH -C` line is left out when empty.
    pub constraint: String,
    pub header: String,
    pub command_str: String,
    pub footer: String,
}

impl SbatchJob {
    /// A job carrying the project's account, mail address and batch defaults,
    /// with empty job name and command sections.
    pub fn from_defaults(session: &Session, config: &Config) -> Self {
        let sbatch = &config.sbatch;
        Self {
            project_id: session.inputs.uppmax_project_id.clone(),
            time: sbatch.time.clone(),
            jobname: String::new(),
            workdir: session.paths.intermediate_dir.display().to_string(),
            partition: sbatch.partition.clone(),
            cores: sbatch.cores,
            mail_type: sbatch.mail_type.clone(),
            mail_user: session.inputs.mail_user.clone(),
            constraint: sbatch.constraint.clone(),
            header: String::new(),
            command_str: String::new(),
            footer: String::new(),
        }
    }

    fn to_vars(&self) -> HashMap<String, String> {
        vars([
            ("project_id", self.project_id.clone()),
            ("time", self.time.clone()),
            ("jobname", self.jobname.clone()),
            ("workdir", self.workdir.clone()),
            ("partition", self.partition.clone()),
            ("cores", self.cores.to_string()),
            ("mail_type", self.mail_type.clone()),
            ("mail_user", self.mail_user.clone()),
            ("constraint", self.constraint.clone()),
            ("header", self.header.clone()),
            ("command_str", self.command_str.clone()),
            ("footer", self.footer.clone()),
        ])
    }
}

/// Render the batch-submission template for one job.
pub fn render_sbatch(job: &SbatchJob) -> Result<String, TemplateError> {
    render_template(SBATCH_TEMPLATE, &job.to_vars())
}
