/*
 * Responsibility
 * - POST /api/auth/login : エリア + パスワード → mvd_auth cookie 発行
 * - POST /api/auth/logout: cookie を空 + Max-Age=0 で上書き (常に成功)
 *
 * Notes
 * - 400 (入力不正) / 401 (パスワード不一致) / 500 (設定不足) を区別して返す
 */
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header::{CACHE_CONTROL, SET_COOKIE},
    response::{AppendHeaders, IntoResponse},
};
use chrono::Utc;

use crate::api::dto::auth::{LoginRequest, LoginResponse, LogoutResponse};
use crate::error::AppError;
use crate::services::auth::cookie;
use crate::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "login body rejected");
        AppError::bad_request("invalid request body")
    })?;

    let (area, password) = req.validate().map_err(AppError::bad_request)?;

    let issued = state
        .auth
        .login(area, &password, Utc::now().timestamp_millis())?;

    Ok((
        [(CACHE_CONTROL, "no-store")],
        AppendHeaders([(
            SET_COOKIE,
            cookie::session_cookie(&issued.token, issued.max_age_seconds),
        )]),
        Json(LoginResponse {
            ok: true,
            area: issued.area.as_str(),
        }),
    ))
}

pub async fn logout() -> impl IntoResponse {
    (
        [(CACHE_CONTROL, "no-store")],
        AppendHeaders([(SET_COOKIE, cookie::clear_cookie())]),
        Json(LogoutResponse { ok: true }),
    )
}
