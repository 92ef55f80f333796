//! Pulling code out of a model reply.
//!
//! Models wrap code in Markdown fences even when told not to, and sometimes
//! surround it with prose. A single pattern handles both: the first fenced
//! block wins and an optional language tag line is dropped.

use std::sync::LazyLock;

use regex::Regex;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:\w+\n)?(.*?)```").expect("valid code fence pattern"));

/// Return the body of the first fenced code block in `reply`, if any.
pub fn extract_code(reply: &str) -> Option<&str> {
    CODE_FENCE
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Like [`extract_code`], but fall back to the trimmed reply when it holds no fence.
pub fn extract_code_or_reply(reply: &str) -> String {
    match extract_code(reply) {
        Some(code) => code.to_string(),
        None => reply.trim().to_string(),
    }
}
