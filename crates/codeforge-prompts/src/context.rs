use chrono::{DateTime, Utc};

/// Parameters shared by every prompt that are not part of the request itself.
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    /// Wall-clock time the model should assume when code reads the clock.
    pub reference_time: Option<DateTime<Utc>>,
}

impl PromptContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference_time(reference_time: DateTime<Utc>) -> Self {
        Self {
            reference_time: Some(reference_time),
        }
    }

    /// Context stamped with the current time, or without one when disabled.
    pub fn now(enabled: bool) -> Self {
        Self {
            reference_time: enabled.then(Utc::now),
        }
    }

    pub fn append_time_reference(&self, prompt: &mut String) {
        if let Some(at) = self.reference_time {
            prompt.push_str(&format!(
                "\nAssume the code runs at {} UTC. Use this for any date or time it reads or prints.\n",
                at.format("%Y-%m-%d %H:%M:%S")
            ));
        }
    }
}
