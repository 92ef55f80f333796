use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use codeforge_model::{GeminiBackend, ModelBackend};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use codeforge_server::config::{Commands, ServerConfig};
use codeforge_server::share_store::{run_sweeper, MemoryStore, SnippetStore};
use codeforge_server::{auth, InnerAppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    match config.command {
        Some(Commands::IssueToken {
            ref subject,
            ttl_hours,
        }) => {
            let secret = match config.jwt_secret.as_deref() {
                Some(s) if !s.is_empty() => s,
                _ => bail!("issue-token needs --jwt-secret or JWT_SECRET"),
            };
            let Some(ttl) = chrono::Duration::try_hours(ttl_hours) else {
                bail!("--ttl-hours {ttl_hours} is out of range");
            };
            let token = auth::issue_token(secret, subject, ttl)?;
            eprintln!("Token for {subject}, valid {ttl_hours}h:");
            // Raw token on stdout so it can be captured
            println!("{token}");
        }
        None => {
            let model: Arc<dyn ModelBackend> = Arc::new(GeminiBackend::new(config.gemini_config())?);
            match model.preflight_check().await {
                Ok(()) => info!("model backend: {} ({})", model.name(), config.gemini_model),
                Err(e) => error!("model backend unusable, every model call will fail: {e}"),
            }

            let auth = auth::build_auth_config(config.jwt_secret.as_deref());
            if auth.is_some() {
                info!("authentication enabled");
            } else {
                warn!("authentication disabled (no JWT_SECRET), protected routes are open");
            }

            let snippets: Arc<dyn SnippetStore> = Arc::new(MemoryStore::new());
            tokio::spawn(run_sweeper(snippets.clone(), config.share_sweep_interval));

            let state = Arc::new(InnerAppState {
                model,
                auth,
                snippets,
                time_reference: config.time_reference,
                share_base_url: config.share_base_url.clone(),
            });

            let addr = config.addr();
            let listener = TcpListener::bind(addr).await?;
            info!("codeforge-server listening on http://{addr}");

            codeforge_server::serve(listener, state).await?;
        }
    }

    Ok(())
}
