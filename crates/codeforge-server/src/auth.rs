use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::routes::AppState;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token is missing")]
    Missing,

    #[error("invalid token: {0}")]
    Invalid(String),

    #[error("failed to sign token: {0}")]
    Encode(String),
}

/// Claims carried by a bearer token.
///
/// Only `exp` is checked. Whatever else the issuer put in the token is kept
/// in `extra` and handed to handlers through request extensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Authentication configuration: an HS256 shared secret.
pub struct AuthConfig {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthConfig {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is enforced when present but tokens without one are accepted.
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = true;
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::Invalid(e.to_string()))
    }
}

/// Build an `Option<AuthConfig>` from the configured secret.
///
/// Returns `None` (open access) when no secret, or an empty one, is set.
pub fn build_auth_config(secret: Option<&str>) -> Option<Arc<AuthConfig>> {
    secret
        .filter(|s| !s.is_empty())
        .map(|s| Arc::new(AuthConfig::new(s)))
}

/// Mint an HS256 token for `subject` valid for `ttl`.
pub fn issue_token(secret: &str, subject: &str, ttl: chrono::Duration) -> Result<String, AuthError> {
    let now = Utc::now();
    let expires_at = now
        .checked_add_signed(ttl)
        .ok_or_else(|| AuthError::Encode(format!("token lifetime out of range: {ttl}")))?;
    let claims = Claims {
        sub: Some(subject.to_string()),
        exp: Some(expires_at.timestamp()),
        iat: Some(now.timestamp()),
        extra: Map::new(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Encode(e.to_string()))
}

/// Pull the token out of an `Authorization: Bearer <token>` header value.
fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    header
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::Missing)
}

/// Axum middleware that enforces authentication.
///
/// If `auth` is `None` in the AppState, all requests pass through (open access).
/// Otherwise a missing token is rejected with 403 and a bad one with 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth = match &state.auth {
        Some(auth) => auth,
        None => return next.run(request).await,
    };

    let header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok());

    let token = match bearer_token(header) {
        Ok(t) => t,
        Err(_) => {
            debug!("auth: rejected {} (no bearer token)", request.uri().path());
            return (
                StatusCode::FORBIDDEN,
                Json(json!({ "message": "Token is missing!" })),
            )
                .into_response();
        }
    };

    match auth.verify(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            debug!("auth: rejected {} ({e})", request.uri().path());
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid token!" })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::test_helpers::{test_router, test_router_with_auth, TEST_SECRET};

    const PROTECTED_BODY: &str = r#"{"problem_description":"hello world","language":"python"}"#;

    fn protected_request(auth: Option<String>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/generate_code")
            .header("content-type", "application/json");
        if let Some(value) = auth {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::from(PROTECTED_BODY)).unwrap()
    }

    #[test]
    fn issued_token_verifies() {
        let token = issue_token("s3cret", "alice", chrono::Duration::hours(1)).unwrap();
        let claims = AuthConfig::new("s3cret").verify(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("alice"));
        assert!(claims.exp.is_some());
    }

    #[test]
    fn out_of_range_lifetime_is_an_error() {
        let err = issue_token("s3cret", "alice", chrono::Duration::MAX).unwrap_err();
        assert!(matches!(err, AuthError::Encode(_)));
        let err = issue_token("s3cret", "alice", chrono::Duration::MIN).unwrap_err();
        assert!(matches!(err, AuthError::Encode(_)));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token("s3cret", "alice", chrono::Duration::hours(1)).unwrap();
        assert!(matches!(
            AuthConfig::new("other").verify(&token),
            Err(AuthError::Invalid(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = issue_token("s3cret", "alice", chrono::Duration::hours(-2)).unwrap();
        assert!(AuthConfig::new("s3cret").verify(&token).is_err());
    }

    #[test]
    fn token_without_exp_is_accepted() {
        let claims = Claims {
            sub: None,
            exp: None,
            iat: None,
            extra: Map::from_iter([("username".to_string(), json!("bob"))]),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"s3cret"),
        )
        .unwrap();
        let decoded = AuthConfig::new("s3cret").verify(&token).unwrap();
        assert_eq!(decoded.extra.get("username"), Some(&json!("bob")));
    }

    #[test]
    fn bearer_token_parsing() {
        assert_eq!(bearer_token(Some("Bearer abc")).unwrap(), "abc");
        assert!(bearer_token(Some("Basic abc")).is_err());
        assert!(bearer_token(Some("Bearer ")).is_err());
        assert!(bearer_token(None).is_err());
    }

    #[test]
    fn empty_secret_disables_auth() {
        assert!(build_auth_config(None).is_none());
        assert!(build_auth_config(Some("")).is_none());
        assert!(build_auth_config(Some("x")).is_some());
    }

    #[tokio::test]
    async fn auth_middleware_no_config_passes_all() {
        let (app, _) = test_router(vec!["```\nprint('hi')\n```"]);
        let resp = app.oneshot(protected_request(None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn auth_middleware_valid_bearer() {
        let (app, _) = test_router_with_auth(vec!["```\nprint('hi')\n```"]);
        let token = issue_token(TEST_SECRET, "tester", chrono::Duration::minutes(5)).unwrap();
        let resp = app
            .oneshot(protected_request(Some(format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn auth_middleware_hands_claims_to_handlers() {
        use axum::routing::get;
        use axum::{middleware, Extension, Router};
        use codeforge_model::MockBackend;

        use crate::routes::InnerAppState;
        use crate::share_store::MemoryStore;
        use crate::test_helpers::body_json;

        let state: AppState = Arc::new(InnerAppState {
            model: Arc::new(MockBackend::success("unused")),
            auth: build_auth_config(Some(TEST_SECRET)),
            snippets: Arc::new(MemoryStore::new()),
            time_reference: false,
            share_base_url: "http://127.0.0.1:5000".into(),
        });
        let app = Router::new()
            .route(
                "/whoami",
                get(|Extension(claims): Extension<Claims>| async move {
                    Json(json!({ "sub": claims.sub, "has_exp": claims.exp.is_some() }))
                }),
            )
            .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
            .with_state(state);

        let token = issue_token(TEST_SECRET, "carol", chrono::Duration::minutes(5)).unwrap();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({"sub": "carol", "has_exp": true})
        );
    }

    #[tokio::test]
    async fn auth_middleware_invalid_bearer() {
        let (app, model) = test_router_with_auth(vec![]);
        let resp = app
            .oneshot(protected_request(Some("Bearer wrong-token".into())))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(model.prompts().is_empty(), "model must not be called");
    }

    #[tokio::test]
    async fn auth_middleware_missing_header() {
        let (app, _) = test_router_with_auth(vec![]);
        let resp = app.oneshot(protected_request(None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn auth_public_endpoints_no_auth_required() {
        let (app, _) = test_router_with_auth(vec!["Hello"]);
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/get-output")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"code":"print('Hello')","language":"python"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
