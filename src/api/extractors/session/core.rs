use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use super::Session;

/// Session を handler で受け取るための extractor
/// middleware が Session を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す (公開パス上のハンドラ・ミドルウェア未設定)
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
