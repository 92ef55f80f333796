use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ModelError {
    #[error("model API key is not configured")]
    MissingApiKey,

    #[error("network error: {0}")]
    Network(String),

    #[error("model API rejected credentials: {0}")]
    Authentication(String),

    #[error("model API rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("model API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no content: {0}")]
    EmptyResponse(String),

    #[error("failed to decode model response: {0}")]
    Decode(String),
}
