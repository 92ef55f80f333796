pub mod analysis;
pub mod context;
pub mod generate;
pub mod refactor;
pub mod web;

pub use context::PromptContext;
use codeforge_core::{Language, WebAsset};

/// Reply the model is told to give when the code is not in the stated language.
pub const LANGUAGE_NOT_SUPPORTED: &str = "Language not supported.";

/// Everything the service can ask the model for.
#[derive(Debug, Clone, Copy)]
pub enum PromptRequest<'a> {
    Generate {
        language: &'a str,
        problem_description: &'a str,
    },
    Analyze {
        language: Language,
        code: &'a str,
    },
    Refactor {
        language: &'a str,
        code: &'a str,
    },
    Html {
        description: &'a str,
    },
    Css {
        html: &'a str,
    },
    Js {
        html: &'a str,
        css: &'a str,
    },
}

impl PromptRequest<'_> {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            PromptRequest::Generate { .. } => "generate",
            PromptRequest::Analyze { .. } => "analyze",
            PromptRequest::Refactor { .. } => "refactor",
            PromptRequest::Html { .. } => WebAsset::Html.as_str(),
            PromptRequest::Css { .. } => WebAsset::Css.as_str(),
            PromptRequest::Js { .. } => WebAsset::Js.as_str(),
        }
    }
}

/// Assemble the full prompt for a request.
///
/// The time reference only applies to templates about running code; the
/// front-end templates ignore it.
pub fn assemble_prompt(ctx: &PromptContext, request: PromptRequest<'_>) -> String {
    match request {
        PromptRequest::Generate {
            language,
            problem_description,
        } => generate::prompt(language, problem_description, ctx),
        PromptRequest::Analyze { language, code } => analysis::prompt(language, code, ctx),
        PromptRequest::Refactor { language, code } => refactor::prompt(language, code, ctx),
        PromptRequest::Html { description } => web::html_prompt(description),
        PromptRequest::Css { html } => web::css_prompt(html),
        PromptRequest::Js { html, css } => web::js_prompt(html, css),
    }
}
