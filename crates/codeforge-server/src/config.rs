use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::{Parser, Subcommand};
use codeforge_model::backend::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use codeforge_model::GeminiConfig;

#[derive(Debug, Parser)]
#[command(name = "codeforge-server", about = "Code generation and analysis service")]
pub struct ServerConfig {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address to listen on
    #[arg(long, env = "CODEFORGE_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    #[arg(long, env = "CODEFORGE_PORT", default_value = "5000")]
    pub port: u16,

    /// Gemini API key. Model calls fail without one.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub gemini_base_url: String,

    /// Timeout for a single model call (seconds)
    #[arg(long, env = "CODEFORGE_MODEL_TIMEOUT", default_value = "120")]
    pub model_timeout: u64,

    /// HS256 secret for bearer tokens. Protected routes are open when unset.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true, global = true)]
    pub jwt_secret: Option<String>,

    /// Base URL that share links are built on
    #[arg(long, env = "TEMP_FILE_URL", default_value = "http://127.0.0.1:5000")]
    pub share_base_url: String,

    /// Stamp code prompts with the current UTC time
    #[arg(
        long,
        env = "CODEFORGE_TIME_REFERENCE",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub time_reference: bool,

    /// How often expired shared snippets are swept (seconds)
    #[arg(long, env = "CODEFORGE_SHARE_SWEEP", default_value = "60")]
    pub share_sweep_interval: u64,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign a bearer token with the configured JWT secret
    IssueToken {
        /// Subject (`sub` claim) of the token
        #[arg(long)]
        subject: String,

        /// Lifetime of the token in hours
        #[arg(long, default_value = "24")]
        ttl_hours: i64,
    },
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.gemini_api_key.clone(),
            model: self.gemini_model.clone(),
            base_url: self.gemini_base_url.clone(),
            timeout: Duration::from_secs(self.model_timeout),
            ..Default::default()
        }
    }
}
