use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use codeforge_core::share::{
    format_expiry, parse_expiry_minutes, ShareId, ShareSnippetRequest, ShareSnippetResponse,
    Snippet,
};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use super::{json_body, AppState};
use crate::error::ApiError;
use crate::share_store::StoredSnippet;

/// Header a viewer must echo back with the share id to read a snippet.
pub const FILE_ID_HEADER: &str = "x-file-id";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/temp-file-upload", post(upload))
        .route("/file/{share_id}/delete", delete(remove))
}

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/file/{share_id}", get(fetch))
}

async fn upload(
    State(state): State<AppState>,
    payload: Result<Json<ShareSnippetRequest>, JsonRejection>,
) -> Result<Json<ShareSnippetResponse>, ApiError> {
    let req = json_body(payload)?;
    let (code, language, title, expiry) =
        match (req.code, req.language, req.title, req.expiry_time) {
            (Some(code), Some(language), Some(title), Some(expiry))
                if !code.is_empty() && !language.is_empty() && !title.is_empty() && !expiry.is_null() =>
            {
                (code, language, title, expiry)
            }
            _ => {
                return Err(ApiError::bad_request(
                    "Code, language, title, and expiry time are required",
                ))
            }
        };
    let minutes = parse_expiry_minutes(&expiry)?;

    let expires_at = Utc::now() + chrono::Duration::minutes(minutes);
    let expiry_time = format_expiry(expires_at);
    let id = ShareId::new(&language, &Uuid::new_v4().to_string());

    state
        .snippets
        .put(
            &id.storage_key(),
            StoredSnippet {
                snippet: Snippet {
                    title,
                    code,
                    language,
                    expiry_time: expiry_time.clone(),
                },
                expires_at,
            },
        )
        .await?;
    info!("share: stored {id} for {minutes}m");

    Ok(Json(ShareSnippetResponse {
        message: "Code uploaded successfully".into(),
        file_url: format!("{}/file/{id}", state.share_base_url.trim_end_matches('/')),
        expiry_time,
    }))
}

async fn fetch(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Snippet>, ApiError> {
    let echoed = headers.get(FILE_ID_HEADER).and_then(|v| v.to_str().ok());
    if echoed != Some(share_id.as_str()) {
        return Err(ApiError::new(
            StatusCode::FORBIDDEN,
            "File ID header does not match",
        ));
    }

    let id = ShareId::parse_str(&share_id)?;
    let stored = state.snippets.get(&id.storage_key()).await?;
    Ok(Json(stored.snippet))
}

async fn remove(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = ShareId::parse_str(&share_id)?;
    state.snippets.delete(&id.storage_key()).await?;
    info!("share: deleted {id}");
    Ok(Json(json!({ "message": "File deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{Duration, Utc};
    use codeforge_core::share::Snippet;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::share_store::{MemoryStore, SnippetStore, StoredSnippet};
    use crate::test_helpers::{body_json, test_router, test_router_with_store};

    fn upload_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/temp-file-upload")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn fetch_request(share_id: &str, header: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(format!("/file/{share_id}"));
        if let Some(h) = header {
            builder = builder.header("X-File-ID", h);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn delete_request(share_id: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(format!("/file/{share_id}/delete"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn upload_fetch_delete() {
        let (app, _) = test_router(vec![]);
        let resp = app
            .clone()
            .oneshot(upload_request(json!({
                "code": "print('hi')",
                "language": "python",
                "title": "greeting",
                "expiryTime": "30"
            })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["message"], "Code uploaded successfully");
        assert!(body["expiry_time"].as_str().unwrap().ends_with(" UTC"));

        let url = body["fileUrl"].as_str().unwrap();
        let share_id = url.rsplit('/').next().unwrap().to_string();
        assert!(url.starts_with("http://127.0.0.1:5000/file/python-"));

        let resp = app
            .clone()
            .oneshot(fetch_request(&share_id, Some(&share_id)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let snippet = body_json(resp).await;
        assert_eq!(snippet["code"], "print('hi')");
        assert_eq!(snippet["title"], "greeting");
        assert_eq!(snippet["language"], "python");
        assert_eq!(snippet["expiry_time"], body["expiry_time"]);

        let resp = app.clone().oneshot(delete_request(&share_id)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({"message": "File deleted successfully"})
        );

        let resp = app
            .oneshot(fetch_request(&share_id, Some(&share_id)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn upload_validation() {
        let (app, _) = test_router(vec![]);
        let resp = app
            .clone()
            .oneshot(upload_request(json!({"code": "x", "language": "go", "title": "t"})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({"error": "Code, language, title, and expiry time are required"})
        );

        let resp = app
            .oneshot(upload_request(json!({
                "code": "x", "language": "go", "title": "t", "expiryTime": 45
            })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({"error": "Invalid expiry time. Please choose a valid value."})
        );
    }

    #[tokio::test]
    async fn fetch_requires_matching_header() {
        let (app, _) = test_router(vec![]);
        for header in [None, Some("python-other")] {
            let resp = app
                .clone()
                .oneshot(fetch_request("python-abc", header))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::FORBIDDEN);
            assert_eq!(
                body_json(resp).await,
                json!({"error": "File ID header does not match"})
            );
        }
    }

    #[tokio::test]
    async fn fetch_rejects_malformed_id() {
        let (app, _) = test_router(vec![]);
        let resp = app
            .oneshot(fetch_request("nodash", Some("nodash")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn expired_snippet_is_gone_then_not_found() {
        let store = Arc::new(MemoryStore::new());
        store
            .put(
                "file:sql-1234:data",
                StoredSnippet {
                    snippet: Snippet {
                        title: "q".into(),
                        code: "SELECT 1;".into(),
                        language: "sql".into(),
                        expiry_time: String::new(),
                    },
                    expires_at: Utc::now() - Duration::seconds(1),
                },
            )
            .await
            .unwrap();
        let app = test_router_with_store(store);

        let resp = app
            .clone()
            .oneshot(fetch_request("sql-1234", Some("sql-1234")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::GONE);
        assert_eq!(body_json(resp).await, json!({"error": "File has expired"}));

        let resp = app
            .oneshot(fetch_request("sql-1234", Some("sql-1234")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await, json!({"error": "File not found"}));
    }

    #[tokio::test]
    async fn delete_unknown_is_404() {
        let (app, _) = test_router(vec![]);
        let resp = app.oneshot(delete_request("rust-missing")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
