use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use codeforge_model::{MockBackend, ModelBackend};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::auth::{build_auth_config, AuthConfig};
use crate::routes::{build_router, AppState, InnerAppState};
use crate::share_store::{MemoryStore, SnippetStore};

/// Secret used by the auth-enabled routers.
pub const TEST_SECRET: &str = "codeforge-test-secret";

/// What the mock model answers once its scripted replies run out.
const FALLBACK_REPLY: &str = "```\nmock\n```";

fn state(
    model: Arc<dyn ModelBackend>,
    auth: Option<Arc<AuthConfig>>,
    snippets: Arc<dyn SnippetStore>,
) -> AppState {
    Arc::new(InnerAppState {
        model,
        auth,
        snippets,
        time_reference: false,
        share_base_url: "http://127.0.0.1:5000".into(),
    })
}

fn scripted(replies: Vec<&str>) -> Arc<MockBackend> {
    Arc::new(MockBackend::success(FALLBACK_REPLY).with_replies(replies))
}

/// Build a test router with a scripted mock model, in-memory snippets, no auth.
///
/// The returned mock records every prompt it was sent.
pub fn test_router(replies: Vec<&str>) -> (Router, Arc<MockBackend>) {
    let model = scripted(replies);
    let router = build_router(state(model.clone(), None, Arc::new(MemoryStore::new())));
    (router, model)
}

/// Same as [`test_router`] with bearer auth enabled under [`TEST_SECRET`].
pub fn test_router_with_auth(replies: Vec<&str>) -> (Router, Arc<MockBackend>) {
    let model = scripted(replies);
    let router = build_router(state(
        model.clone(),
        build_auth_config(Some(TEST_SECRET)),
        Arc::new(MemoryStore::new()),
    ));
    (router, model)
}

pub fn test_router_with_model(model: MockBackend) -> Router {
    build_router(state(Arc::new(model), None, Arc::new(MemoryStore::new())))
}

/// Build a test router over a pre-filled snippet store.
pub fn test_router_with_store(snippets: Arc<dyn SnippetStore>) -> Router {
    build_router(state(scripted(vec![]), None, snippets))
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    pub model: Arc<MockBackend>,
    _handle: tokio::task::JoinHandle<()>,
}

async fn spawn(router: Router, model: Arc<MockBackend>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    TestServer {
        base_url: format!("http://{addr}"),
        model,
        _handle: handle,
    }
}

/// Spawn an open-access server on a random port.
pub async fn spawn_test_server(replies: Vec<&str>) -> TestServer {
    let (router, model) = test_router(replies);
    spawn(router, model).await
}

/// Spawn a server that requires tokens signed with [`TEST_SECRET`].
pub async fn spawn_test_server_with_auth(replies: Vec<&str>) -> TestServer {
    let (router, model) = test_router_with_auth(replies);
    spawn(router, model).await
}
