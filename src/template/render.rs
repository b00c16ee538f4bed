//! Placeholder substitution for the generated project files.
//!
//! # Syntax
//!
//! - `${name}` - Substitutes the value of variable `name`
//! - `${name?prefix}` - Substitutes `prefix` followed by the value of `name`
//!   when the value is non-empty, and nothing when it is empty
//! - `$$` - Renders as a literal `$`
//! - A `$` followed by anything else is copied through unchanged, so shell
//!   variables such as `$SLURM_JOB_ID` need no escaping
//!
//! # Error Handling
//!
//! Undefined variables are an error rather than being rendered as empty text
//! or left in the output verbatim.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    /// A `${` was found without a matching `}`.
    #[error("unclosed '${{' at position {position} in template")]
    UnclosedPlaceholder { position: usize },

    /// A placeholder with no variable name (e.g. `${}` or `${?x}`).
    #[error("empty variable name at position {position} in template")]
    EmptyVariableName { position: usize },
}

/// Render a template string by substituting variables.
///
/// ```ignore
/// let vars = vars([("constraint", "mem512GB")]);
/// let out = render_template("${constraint?#SBATCH -C }", &vars)?;
/// assert_eq!(out, "#SBATCH -C mem512GB");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some((_, '$')) => {
                chars.next();
                result.push('$');
            }
            Some((_, '{')) => {
                chars.next();
                let mut body = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => body.push(c),
                        None => return Err(TemplateError::UnclosedPlaceholder { position: pos }),
                    }
                }

                let (name, prefix) = match body.split_once('?') {
                    Some((name, prefix)) => (name.trim(), Some(prefix)),
                    None => (body.trim(), None),
                };
                if name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                let value = variables
                    .get(name)
                    .ok_or_else(|| TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position: pos,
                    })?;

                match prefix {
                    None => result.push_str(value),
                    Some(prefix) if !value.is_empty() => {
                        result.push_str(prefix);
                        result.push_str(value);
                    }
                    Some(_) => {}
                }
            }
            _ => result.push('$'),
        }
    }

    Ok(result)
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
