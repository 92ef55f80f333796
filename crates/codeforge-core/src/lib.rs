pub mod error;
pub mod extract;
pub mod language;
pub mod request;
pub mod share;
pub mod web;

pub use error::{require, CodeforgeError};
pub use extract::{extract_code, extract_code_or_reply};
pub use language::{Language, LanguageKind};
pub use web::WebAsset;
