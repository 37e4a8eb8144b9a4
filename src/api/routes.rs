/*
 * Responsibility
 * - URL 構造を定義
 * - /, /health, /api/auth/{login,logout}, 各エリアのシェル
 * - gate は app.rs で Router 全体に掛ける (公開パスの判定は gate 側のテーブル)
 */
use axum::{
    Router,
    extract::OriginalUri,
    routing::{get, post},
};

use crate::api::extractors::Session;
use crate::api::handlers::{
    areas::{area_page, landing},
    auth::{login, logout},
    health::{health, not_found},
};
use crate::services::auth::{
    Area,
    gate::{LANDING_PATH, LOGIN_PATH, LOGOUT_PATH},
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let router = Router::new()
        .route(LANDING_PATH, get(landing))
        .route("/health", get(health))
        .route(LOGIN_PATH, post(login))
        .route(LOGOUT_PATH, post(logout))
        .fallback(not_found);

    Area::ALL.into_iter().fold(router, |router, area| {
        let page = get(move |uri: OriginalUri, session: Session| area_page(area, uri, session));
        router
            .route(&format!("/{area}"), page.clone())
            .route(&format!("/{area}/{{*rest}}"), page)
    })
}
