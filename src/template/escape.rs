//! Escaping of variable values for the output formats they land in.
//!
//! Ordinary paths come out byte-identical; only values that would be misread
//! in their target format are quoted or escaped.

/// Escape a value for use inside a Python string literal, single or double quoted.
pub fn python_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a value as a YAML scalar.
///
/// The value is left plain when YAML reads it back as the same string (not a
/// number, boolean, null, mapping, or a string cut short by a comment), and
/// double-quoted otherwise. A JSON string literal is a valid YAML
/// double-quoted scalar.
pub fn yaml_scalar(value: &str) -> String {
    let plain_round_trips = !value.contains('\n')
        && matches!(
            serde_yaml::from_str::<serde_yaml::Value>(value),
            Ok(serde_yaml::Value::String(parsed)) if parsed == value
        );

    if plain_round_trips {
        return value.to_string();
    }
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value.escape_default()))
}
