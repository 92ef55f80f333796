//! JSON bodies accepted and returned by the HTTP API.
//!
//! Request fields are all optional so that an absent field is reported as a
//! 400 naming the field instead of a generic deserialisation rejection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateCodeRequest {
    pub problem_description: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunCodeRequest {
    pub code: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefactorCodeRequest {
    pub code: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebGenerateRequest {
    pub prompt: Option<String>,
    #[serde(rename = "type")]
    pub asset: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebRefactorRequest {
    pub html: Option<String>,
    pub css: Option<String>,
    pub js: Option<String>,
    #[serde(rename = "type")]
    pub asset: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeResponse {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputResponse {
    pub output: String,
}
