pub mod auth;
pub mod config;
pub mod error;
pub mod generation;
pub mod pipeline;
pub mod share_store;
mod routes;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use anyhow::Result;
use tokio::net::TcpListener;

pub use routes::{AppState, InnerAppState};

pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = routes::build_router(state);
    axum::serve(listener, app).await?;
    Ok(())
}
