//! `mvd_auth` cookie の検証 → Session を extensions に入れる
//!
//! - 公開パスはそのまま通す
//! - それ以外は署名・期限・スコープを確認し、失敗は理由に関係なく `/` へ 307 リダイレクト
//! - 理由はログ (debug) にだけ残す

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;

use crate::api::extractors::Session;
use crate::services::auth::cookie::{AUTH_COOKIE_NAME, token_from_cookie_header};
use crate::services::auth::gate::{Decision, LANDING_PATH};
use crate::state::AppState;

/// Put the access gate in front of every route of `router`.
///
/// ```ignore
/// let router = api::routes();
/// let router = middleware::auth::access::apply(router, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    // HTTP/2 クライアントは Cookie を複数フィールドに分割して送ることがあるため全件を見る
    let cookie_token = req
        .headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|h| token_from_cookie_header(h, AUTH_COOKIE_NAME));

    let now_millis = Utc::now().timestamp_millis();

    let decision = state.auth.decide(req.uri().path(), cookie_token, now_millis);

    match decision {
        Decision::Admitted(claims) => {
            if let Some(claims) = claims {
                // middleware → extractor への受け渡し
                req.extensions_mut().insert(Session::new(claims));
            }
            next.run(req).await
        }
        Decision::Redirected(reason) => {
            tracing::debug!(
                path = %req.uri().path(),
                reason = %reason,
                "access denied"
            );
            Redirect::temporary(LANDING_PATH).into_response()
        }
    }
}
