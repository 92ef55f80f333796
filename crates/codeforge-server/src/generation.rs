use std::time::Instant;

use codeforge_model::{ModelBackend, ModelError};
use codeforge_prompts::{assemble_prompt, PromptContext, PromptRequest};
use tracing::info;

/// Render `request` into a prompt and send it to the model, returning the raw reply.
pub async fn complete(
    model: &dyn ModelBackend,
    ctx: &PromptContext,
    request: PromptRequest<'_>,
) -> Result<String, ModelError> {
    let prompt = assemble_prompt(ctx, request);
    let started = Instant::now();
    let reply = model.generate(&prompt).await?;
    info!(
        "{}: {} via {} ({} prompt chars, {} reply chars, {:?})",
        request.label(),
        model.model_hint().unwrap_or("-"),
        model.name(),
        prompt.len(),
        reply.len(),
        started.elapsed()
    );
    Ok(reply)
}
