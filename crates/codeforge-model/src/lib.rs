pub mod backend;
mod error;

pub use backend::gemini::{GeminiBackend, GeminiConfig};
pub use backend::mock::MockBackend;
pub use backend::ModelBackend;
pub use error::ModelError;
