pub mod gemini;
pub mod mock;

use async_trait::async_trait;

use crate::ModelError;

/// A text-generation model reachable over some transport.
///
/// Backends only move a finished prompt to the model and its raw reply
/// back. Prompt assembly lives in codeforge-prompts and code extraction in
/// codeforge-core.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Human-readable backend name for logging and health reporting.
    fn name(&self) -> &str;

    /// Model identifier, for logging/display purposes.
    fn model_hint(&self) -> Option<&str> {
        None
    }

    /// Check the backend is usable. Called once at server startup.
    async fn preflight_check(&self) -> Result<(), ModelError> {
        Ok(())
    }

    /// Send `prompt` and return the model's raw text reply.
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
