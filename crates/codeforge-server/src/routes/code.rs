use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use codeforge_core::request::{
    CodeResponse, GenerateCodeRequest, OutputResponse, RefactorCodeRequest, RunCodeRequest,
};
use codeforge_core::{extract_code_or_reply, require, CodeforgeError, Language};
use codeforge_prompts::{PromptContext, PromptRequest};

use super::{json_body, AppState};
use crate::error::ApiError;
use crate::generation::complete;

/// Generation and refactoring, which sit behind the auth gate.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/generate_code", post(generate_code))
        .route("/refactor_code", post(refactor_code))
}

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/get-output", post(get_output))
}

async fn generate_code(
    State(state): State<AppState>,
    payload: Result<Json<GenerateCodeRequest>, JsonRejection>,
) -> Result<Json<CodeResponse>, ApiError> {
    let req = json_body(payload)?;
    let problem_description = require("problem_description", req.problem_description)?;
    let language = require("language", req.language)?;

    let ctx = PromptContext::now(state.time_reference);
    let reply = complete(
        state.model.as_ref(),
        &ctx,
        PromptRequest::Generate {
            language: &language,
            problem_description: &problem_description,
        },
    )
    .await?;

    Ok(Json(CodeResponse {
        code: extract_code_or_reply(reply.trim()),
    }))
}

async fn get_output(
    State(state): State<AppState>,
    payload: Result<Json<RunCodeRequest>, JsonRejection>,
) -> Result<Json<OutputResponse>, ApiError> {
    let req = json_body(payload)?;
    let code = require("code", req.code)?;
    let slug = require("language", req.language)?;
    let language =
        Language::parse_str(&slug).ok_or(CodeforgeError::UnsupportedLanguage(slug))?;

    let ctx = PromptContext::now(state.time_reference);
    let output = complete(
        state.model.as_ref(),
        &ctx,
        PromptRequest::Analyze {
            language,
            code: &code,
        },
    )
    .await?;

    // The analysis is the answer; there is no code block to pull out.
    Ok(Json(OutputResponse { output }))
}

async fn refactor_code(
    State(state): State<AppState>,
    payload: Result<Json<RefactorCodeRequest>, JsonRejection>,
) -> Result<Json<CodeResponse>, ApiError> {
    let req = json_body(payload)?;
    let code = require("code", req.code)?;
    let language = require("language", req.language)?;

    let ctx = PromptContext::now(state.time_reference);
    let reply = complete(
        state.model.as_ref(),
        &ctx,
        PromptRequest::Refactor {
            language: &language,
            code: &code,
        },
    )
    .await?;

    Ok(Json(CodeResponse {
        code: extract_code_or_reply(reply.trim()),
    }))
}
