use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three coordinated front-end assets.
///
/// Variants are declared in pipeline order, so `Ord` follows the stage
/// sequence: HTML feeds CSS, and both feed JS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebAsset {
    Html,
    Css,
    Js,
}

impl WebAsset {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebAsset::Html => "html",
            WebAsset::Css => "css",
            WebAsset::Js => "js",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "html" => Some(WebAsset::Html),
            "css" => Some(WebAsset::Css),
            "js" => Some(WebAsset::Js),
            _ => None,
        }
    }

    /// 1-based position in the HTML → CSS → JS pipeline.
    pub fn stage(&self) -> usize {
        match self {
            WebAsset::Html => 1,
            WebAsset::Css => 2,
            WebAsset::Js => 3,
        }
    }
}

impl fmt::Display for WebAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
