//! Validators for prompt answers.
//!
//! Each validator takes the decoded answer and either returns the accepted
//! value or a [`ValidationError`] whose message is shown before re-asking.
//! Only [`nonempty`] and [`existing_path`] are used by the default field set;
//! the others are available for additional fields.

use std::path::Path;
use thiserror::Error;

/// An answer was rejected; the message tells the operator what to enter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Accept any non-empty answer unchanged.
pub fn nonempty(x: &str) -> Result<String, ValidationError> {
    if x.is_empty() {
        return Err(ValidationError::new("Please enter some text."));
    }
    Ok(x.to_string())
}

/// Accept any path that is not an existing non-directory.
///
/// Paths that do not exist yet are accepted; they are created later.
pub fn existing_path(x: &str) -> Result<String, ValidationError> {
    let path = Path::new(x);
    if path.exists() && !path.is_dir() {
        return Err(ValidationError::new("Please enter a valid path name."));
    }
    Ok(x.to_string())
}

/// Accept only one of `options`.
#[allow(dead_code)]
pub fn choice<'a>(
    options: &'a [&'a str],
) -> impl Fn(&str) -> Result<String, ValidationError> + 'a {
    move |x: &str| {
        if !options.iter().any(|option| *option == x) {
            return Err(ValidationError::new(format!(
                "Please enter one of {}.",
                options.join(", ")
            )));
        }
        Ok(x.to_string())
    }
}

/// Parse `y`/`yes`/`n`/`no` in any case.
#[allow(dead_code)]
pub fn boolean(x: &str) -> Result<bool, ValidationError> {
    match x.to_uppercase().as_str() {
        "Y" | "YES" => Ok(true),
        "N" | "NO" => Ok(false),
        _ => Err(ValidationError::new("Please enter either 'y' or 'n'.")),
    }
}

/// Accept a file suffix such as `.rst`: a leading dot plus at least one character.
#[allow(dead_code)]
pub fn suffix(x: &str) -> Result<String, ValidationError> {
    if !(x.starts_with('.') && x.len() > 1) {
        return Err(ValidationError::new(
            "Please enter a file suffix, e.g. '.rst' or '.txt'.",
        ));
    }
    Ok(x.to_string())
}
