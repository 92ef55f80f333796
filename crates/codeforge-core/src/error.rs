use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodeforgeError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Return the value of a required request field.
///
/// Absent, empty and whitespace-only values are all treated as missing.
pub fn require(field: &'static str, value: Option<String>) -> Result<String, CodeforgeError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CodeforgeError::MissingField(field)),
    }
}
