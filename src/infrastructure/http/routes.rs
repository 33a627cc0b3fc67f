//! HTTP Routes
//!
//! API Endpoints:
//! - /ping               GET   健康检查
//! - /generate/intro     POST  生成 1~2 句介绍
//! - /generate/summary   POST  生成指定句数的摘要
//! - /generate/all       POST  同时生成介绍与摘要

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/generate", generate_routes())
}

/// Generate 路由
fn generate_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/intro", post(handlers::generate_intro))
        .route("/summary", post(handlers::generate_summary))
        .route("/all", post(handlers::generate_all))
}
