//! Ordered HTML → CSS → JS generation.
//!
//! Each stage's extracted output is embedded in the next stage's prompt, so
//! stages run strictly one after another and a failure stops the pipeline.

use std::time::Instant;

use codeforge_core::{extract_code_or_reply, WebAsset};
use codeforge_model::{ModelBackend, ModelError};
use codeforge_prompts::{PromptContext, PromptRequest};
use tracing::info;

use crate::generation::complete;

/// The assets produced by one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebBundle {
    pub html: Option<String>,
    pub css: Option<String>,
    pub js: Option<String>,
}

impl WebBundle {
    pub fn get(&self, asset: WebAsset) -> Option<&str> {
        match asset {
            WebAsset::Html => self.html.as_deref(),
            WebAsset::Css => self.css.as_deref(),
            WebAsset::Js => self.js.as_deref(),
        }
    }

    pub fn take(self, asset: WebAsset) -> Option<String> {
        match asset {
            WebAsset::Html => self.html,
            WebAsset::Css => self.css,
            WebAsset::Js => self.js,
        }
    }
}

pub struct WebPipeline<'a> {
    model: &'a dyn ModelBackend,
}

impl<'a> WebPipeline<'a> {
    pub fn new(model: &'a dyn ModelBackend) -> Self {
        Self { model }
    }

    /// Run every stage up to and including `target`.
    pub async fn run(&self, description: &str, target: WebAsset) -> Result<WebBundle, ModelError> {
        let html = self.stage(WebAsset::Html, PromptRequest::Html { description }).await?;
        if target == WebAsset::Html {
            return Ok(WebBundle {
                html: Some(html),
                ..Default::default()
            });
        }

        let css = self.stage(WebAsset::Css, PromptRequest::Css { html: &html }).await?;
        if target == WebAsset::Css {
            return Ok(WebBundle {
                html: Some(html),
                css: Some(css),
                js: None,
            });
        }

        let js = self
            .stage(WebAsset::Js, PromptRequest::Js { html: &html, css: &css })
            .await?;
        Ok(WebBundle {
            html: Some(html),
            css: Some(css),
            js: Some(js),
        })
    }

    async fn stage(&self, asset: WebAsset, request: PromptRequest<'_>) -> Result<String, ModelError> {
        let started = Instant::now();
        let reply = complete(self.model, &PromptContext::default(), request).await?;
        info!(
            "web pipeline: stage {}/3 ({asset}) done in {:?}",
            asset.stage(),
            started.elapsed()
        );
        Ok(extract_code_or_reply(&reply))
    }
}
