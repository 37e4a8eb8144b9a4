/*
 * Responsibility
 * - GET /health (疎通用、gate の公開パス)
 * - fallback (gate を通過した未定義パス)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
