use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::ModelBackend;
use crate::ModelError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Connection settings for the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent as the `key` query parameter. Calls fail without one.
    pub api_key: Option<String>,
    /// Model name, e.g. "gemini-1.5-flash" or "gemini-1.5-pro"
    pub model: String,
    pub base_url: String,
    /// Upper bound on a single generateContent call.
    pub timeout: Duration,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

/// Google Gemini backend over the `generateContent` REST endpoint.
pub struct GeminiBackend {
    config: GeminiConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl GeminiBackend {
    pub fn new(config: GeminiConfig) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ModelError::Network(format!("build HTTP client: {e}")))?;
        let config = GeminiConfig {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ..config
        };
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerateRequest<'a> {
        let generation_config =
            if self.config.temperature.is_some() || self.config.max_output_tokens.is_some() {
                Some(GenerationConfig {
                    temperature: self.config.temperature,
                    max_output_tokens: self.config.max_output_tokens,
                })
            } else {
                None
            };
        GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config,
        }
    }
}

/// Join the text parts of the first candidate.
fn reply_text(response: GenerateResponse) -> Result<String, ModelError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ModelError::EmptyResponse(format!("prompt blocked: {reason}")));
    }
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ModelError::EmptyResponse("no candidates".into()))?;
    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".into());
        return Err(ModelError::EmptyResponse(format!("finish reason: {reason}")));
    }
    Ok(text)
}

fn status_error(status: StatusCode, body: &str) -> ModelError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ModelError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => ModelError::RateLimited(message),
        _ => ModelError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl ModelBackend for GeminiBackend {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model_hint(&self) -> Option<&str> {
        Some(self.config.model.as_str())
    }

    async fn preflight_check(&self) -> Result<(), ModelError> {
        match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(()),
            _ => Err(ModelError::MissingApiKey),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(ModelError::MissingApiKey),
        };

        let started = Instant::now();
        let resp = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ModelError::Network(format!("read body: {e}")))?;

        if !status.is_success() {
            error!("gemini: HTTP {status} after {:?}", started.elapsed());
            return Err(status_error(status, &body));
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| ModelError::Decode(e.to_string()))?;
        let text = reply_text(parsed)?;
        debug!(
            "gemini: {} prompt chars -> {} reply chars in {:?}",
            prompt.len(),
            text.len(),
            started.elapsed()
        );
        Ok(text)
    }
}
