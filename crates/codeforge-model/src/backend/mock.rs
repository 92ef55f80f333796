use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::ModelBackend;
use crate::ModelError;

/// A scripted backend for tests.
///
/// Replies are served in order; once the script runs out every call gets
/// the fallback reply. Every prompt received is recorded.
pub struct MockBackend {
    script: Mutex<VecDeque<Result<String, ModelError>>>,
    fallback: Result<String, ModelError>,
    prompts: Mutex<Vec<String>>,
}

impl MockBackend {
    /// Always reply with `reply`.
    pub fn success(reply: &str) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with `error`.
    pub fn failure(error: ModelError) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Reply with each entry of `replies` in turn, then with `fallback`.
    pub fn with_replies(mut self, replies: Vec<&str>) -> Self {
        self.script = Mutex::new(replies.into_iter().map(|r| Ok(r.to_string())).collect());
        self
    }

    /// Queue a failure after any replies scripted so far.
    pub fn then_fail(self, error: ModelError) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(Err(error));
        }
        self
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ModelBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn model_hint(&self) -> Option<&str> {
        Some("mock-model")
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let next = self.script.lock().ok().and_then(|mut s| s.pop_front());
        next.unwrap_or_else(|| self.fallback.clone())
    }
}
