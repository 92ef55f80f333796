//! Temporary code snippets shared by link.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CodeforgeError;

/// Lifetimes a snippet may be given, in minutes: 10m, 30m, 1h, 1d, 1w.
pub const EXPIRY_CHOICES_MINUTES: [i64; 5] = [10, 30, 60, 1440, 10080];

/// Format of the `expiry_time` field returned to clients.
pub const EXPIRY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareSnippetRequest {
    pub code: Option<String>,
    pub language: Option<String>,
    pub title: Option<String>,
    /// Minutes until expiry; clients send either a number or a numeric string.
    #[serde(rename = "expiryTime")]
    pub expiry_time: Option<Value>,
}

/// A stored snippet, as returned by the fetch endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub title: String,
    pub code: String,
    pub language: String,
    pub expiry_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareSnippetResponse {
    pub message: String,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    pub expiry_time: String,
}

/// Validate the requested lifetime against [`EXPIRY_CHOICES_MINUTES`].
pub fn parse_expiry_minutes(value: &Value) -> Result<i64, CodeforgeError> {
    let minutes = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match minutes {
        Some(m) if EXPIRY_CHOICES_MINUTES.contains(&m) => Ok(m),
        _ => Err(CodeforgeError::InvalidInput(
            "Invalid expiry time. Please choose a valid value.".into(),
        )),
    }
}

pub fn format_expiry(at: DateTime<Utc>) -> String {
    at.format(EXPIRY_FORMAT).to_string()
}

/// Identifier of a shared snippet: `{language}-{uuid}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareId {
    pub language: String,
    pub file_id: String,
}

impl ShareId {
    pub fn new(language: &str, file_id: &str) -> Self {
        Self {
            language: language.to_string(),
            file_id: file_id.to_string(),
        }
    }

    /// Split on the first `-`; the language slug never contains one.
    pub fn parse_str(s: &str) -> Result<Self, CodeforgeError> {
        match s.split_once('-') {
            Some((language, file_id)) if !language.is_empty() => Ok(Self::new(language, file_id)),
            _ => Err(CodeforgeError::InvalidInput(
                "Invalid share id format. It should be 'language-file_id'.".into(),
            )),
        }
    }

    /// Storage key for the snippet body.
    pub fn storage_key(&self) -> String {
        format!("file:{}:data", self)
    }
}

impl std::fmt::Display for ShareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.language, self.file_id)
    }
}
