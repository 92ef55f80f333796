pub mod code;
pub mod health;
pub mod share;
pub mod web;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{middleware, Json, Router};
use codeforge_model::ModelBackend;
use tower_http::cors::CorsLayer;

use crate::auth::{auth_middleware, AuthConfig};
use crate::error::ApiError;
use crate::share_store::SnippetStore;

pub struct InnerAppState {
    pub model: Arc<dyn ModelBackend>,
    pub auth: Option<Arc<AuthConfig>>,
    pub snippets: Arc<dyn SnippetStore>,
    /// Stamp code prompts with the current time.
    pub time_reference: bool,
    /// Public base URL that share links are built on.
    pub share_base_url: String,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .merge(health::routes())
        .merge(code::public_routes())
        .merge(share::public_routes());

    let protected = Router::new()
        .merge(code::routes())
        .merge(web::routes())
        .merge(share::routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    public
        .merge(protected)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Unwrap a JSON body, reporting malformed input as a JSON 400.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| ApiError::bad_request(e.body_text()))
}
