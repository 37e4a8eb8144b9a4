/*
 * Responsibility
 * - GET /            : ランディング (ログイン可能なエリア一覧)
 * - GET /{area}[/..] : エリアのシェル。gate を通過したセッション情報を返す
 *   (ページ描画そのものはこのサービスの外)
 */
use axum::{Json, extract::OriginalUri};
use serde::Serialize;

use crate::api::extractors::Session;
use crate::services::auth::{Area, gate::LOGIN_PATH};

#[derive(Debug, Serialize)]
pub struct LandingResponse {
    pub areas: Vec<&'static str>,
    pub login: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaPageResponse {
    pub area: &'static str,
    pub path: String,
    pub scopes: Vec<String>,
    pub expires_at_millis: i64,
}

pub async fn landing() -> Json<LandingResponse> {
    Json(LandingResponse {
        areas: Area::ALL.iter().map(Area::as_str).collect(),
        login: LOGIN_PATH,
    })
}

pub async fn area_page(area: Area, uri: OriginalUri, session: Session) -> Json<AreaPageResponse> {
    Json(AreaPageResponse {
        area: area.as_str(),
        path: uri.path().to_string(),
        scopes: session.scopes().iter().cloned().collect(),
        expires_at_millis: session.expires_at_millis(),
    })
}
