//! Generate Handlers
//!
//! 请求体先校验为领域类型，校验失败直接返回 400，不触发任何上游调用。

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::{GenerateAllCommand, GenerateIntroCommand, GenerateSummaryCommand};
use crate::infrastructure::http::dto::{
    AllResponse, GenerateRequestDto, IntroResponse, SummaryResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// Intro
// ============================================================================

pub async fn generate_intro(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequestDto>, JsonRejection>,
) -> Result<Json<IntroResponse>, ApiError> {
    let Json(req) = payload?;
    let cmd = GenerateIntroCommand {
        request: req.to_generation_request()?,
    };

    let result = state.generate_intro_handler.handle(cmd).await?;

    Ok(Json(IntroResponse {
        intro: result.intro,
    }))
}

// ============================================================================
// Summary
// ============================================================================

pub async fn generate_summary(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequestDto>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(req) = payload?;
    let cmd = GenerateSummaryCommand {
        request: req.to_generation_request()?,
        sentences: req.sentence_count(state.max_sentences)?,
    };

    let result = state.generate_summary_handler.handle(cmd).await?;

    Ok(Json(SummaryResponse {
        summary: result.summary,
    }))
}

// ============================================================================
// All
// ============================================================================

pub async fn generate_all(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequestDto>, JsonRejection>,
) -> Result<Json<AllResponse>, ApiError> {
    let Json(req) = payload?;
    let cmd = GenerateAllCommand {
        request: req.to_generation_request()?,
        sentences: req.sentence_count(state.max_sentences)?,
    };

    let result = state.generate_all_handler.handle(cmd).await?;

    Ok(Json(AllResponse {
        intro: result.intro,
        summary: result.summary,
    }))
}
