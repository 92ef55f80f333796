use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use codeforge_core::request::{WebGenerateRequest, WebRefactorRequest};
use codeforge_core::WebAsset;
use serde_json::{json, Value};

use super::{json_body, AppState};
use crate::error::ApiError;
use crate::pipeline::WebPipeline;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/htmlcssjsgenerate-code", post(generate))
        .route("/htmlcssjsrefactor-code", post(refactor))
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Run the pipeline and answer with only the requested asset, keyed by its name.
async fn respond(state: &AppState, description: &str, asset: WebAsset) -> Result<Json<Value>, ApiError> {
    let bundle = WebPipeline::new(state.model.as_ref())
        .run(description, asset)
        .await?;
    Ok(Json(json!({ asset.as_str(): bundle.take(asset) })))
}

async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<WebGenerateRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let req = json_body(payload)?;
    let (prompt, asset) = match (req.prompt, req.asset) {
        (Some(p), Some(a)) if !p.trim().is_empty() && !a.is_empty() => (p, a),
        _ => return Err(ApiError::bad_request("Prompt and type are required.")),
    };
    let asset = WebAsset::parse_str(&asset).ok_or_else(|| {
        ApiError::bad_request("Invalid type. Please choose from 'html', 'css', or 'js'.")
    })?;

    respond(&state, &prompt, asset).await
}

/// Refactoring reruns the pipeline with the caller's HTML as the description.
///
/// CSS needs the HTML it styles; JS needs both.
async fn refactor(
    State(state): State<AppState>,
    payload: Result<Json<WebRefactorRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let req = json_body(payload)?;
    let asset = match req.asset.as_deref() {
        Some(a) if !a.is_empty() => WebAsset::parse_str(a),
        _ => return Err(ApiError::bad_request("Type is required.")),
    };

    let has_required = match asset {
        Some(WebAsset::Html) | Some(WebAsset::Css) => present(&req.html),
        Some(WebAsset::Js) => present(&req.html) && present(&req.css),
        None => false,
    };
    let (asset, html) = match (asset, req.html) {
        (Some(asset), Some(html)) if has_required => (asset, html),
        _ => {
            return Err(ApiError::bad_request(
                "Please provide the appropriate content for the requested type.",
            ))
        }
    };

    respond(&state, &html, asset).await
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::test_helpers::{body_json, test_router};

    const HTML: &str = "```html\n<ul id=\"todos\"></ul>\n```";
    const CSS: &str = "```css\n#todos { list-style: none; }\n```";
    const JS: &str = "```js\nconst list = document.getElementById('todos');\n```";

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn generate_html_only() {
        let (app, model) = test_router(vec![HTML]);
        let resp = app
            .oneshot(post_json(
                "/htmlcssjsgenerate-code",
                json!({"prompt": "a todo list", "type": "html"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({"html": "<ul id=\"todos\"></ul>\n"})
        );
        assert_eq!(model.prompts().len(), 1);
    }

    #[tokio::test]
    async fn generate_js_runs_all_three_stages() {
        let (app, model) = test_router(vec![HTML, CSS, JS]);
        let resp = app
            .oneshot(post_json(
                "/htmlcssjsgenerate-code",
                json!({"prompt": "a todo list", "type": "js"}),
            ))
            .await
            .unwrap();
        assert_eq!(
            body_json(resp).await,
            json!({"js": "const list = document.getElementById('todos');\n"})
        );
        let prompts = model.prompts();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[2].contains("#todos { list-style: none; }"));
    }

    #[tokio::test]
    async fn generate_validation() {
        let (app, _) = test_router(vec![]);
        let resp = app
            .clone()
            .oneshot(post_json("/htmlcssjsgenerate-code", json!({"type": "css"})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({"error": "Prompt and type are required."})
        );

        let resp = app
            .oneshot(post_json(
                "/htmlcssjsgenerate-code",
                json!({"prompt": "x", "type": "svg"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({"error": "Invalid type. Please choose from 'html', 'css', or 'js'."})
        );
    }

    #[tokio::test]
    async fn refactor_css_uses_supplied_html() {
        let (app, model) = test_router(vec![HTML, CSS]);
        let resp = app
            .oneshot(post_json(
                "/htmlcssjsrefactor-code",
                json!({"type": "css", "html": "<ul id=todos></ul>"}),
            ))
            .await
            .unwrap();
        assert_eq!(
            body_json(resp).await,
            json!({"css": "#todos { list-style: none; }\n"})
        );
        assert!(model.prompts()[0].contains("Project description: <ul id=todos></ul>"));
    }

    #[tokio::test]
    async fn refactor_validation() {
        let (app, model) = test_router(vec![]);
        let resp = app
            .clone()
            .oneshot(post_json("/htmlcssjsrefactor-code", json!({"html": "<p></p>"})))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await, json!({"error": "Type is required."}));

        for body in [
            json!({"type": "html"}),
            json!({"type": "css", "css": "p {}"}),
            json!({"type": "js", "html": "<p></p>"}),
            json!({"type": "svg", "html": "<p></p>"}),
        ] {
            let resp = app
                .clone()
                .oneshot(post_json("/htmlcssjsrefactor-code", body))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(resp).await,
                json!({"error": "Please provide the appropriate content for the requested type."})
            );
        }
        assert!(model.prompts().is_empty());
    }
}
