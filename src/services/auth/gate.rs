//! Per-request access decision.
//!
//! `UNCHECKED → {Admitted, Redirected}`; the first failing step ends the
//! evaluation. Every redirect points at [`LANDING_PATH`] no matter which step
//! failed, so the client cannot tell an expired token from a wrong scope.
//!
//! The path tables are static and not runtime-configurable.

use super::area::Area;
use super::codec::Claims;
use super::error::AuthError;
use super::signer::SigningKey;
use super::token;

pub const LANDING_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";

const PUBLIC_PATHS: &[&str] = &[
    LANDING_PATH,
    "/health",
    "/favicon.ico",
    "/robots.txt",
    LOGIN_PATH,
    LOGOUT_PATH,
];

const PUBLIC_PREFIXES: &[&str] = &["/_next/", "/static/", "/assets/"];

/// Path prefix → required scope. First match wins; unmatched paths fall back to
/// [`DEFAULT_SCOPE`]. Refinery has no rule of its own, so refinery pages need `capex`.
const SCOPE_RULES: &[(&str, Area)] = &[("/planta", Area::Planta), ("/api/planta", Area::Planta)];

const DEFAULT_SCOPE: Area = Area::Capex;

#[derive(Debug)]
pub enum Decision {
    /// `None` for public paths, the verified claims otherwise.
    Admitted(Option<Claims>),
    /// The reason is for logs and tests only.
    Redirected(AuthError),
}

impl Decision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Decision::Admitted(_))
    }
}

// `/planta` matches `/planta` and `/planta/...` but not `/plantas`.
fn under_prefix(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path) || PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p))
}

pub fn required_scope(path: &str) -> Area {
    SCOPE_RULES
        .iter()
        .find(|(prefix, _)| under_prefix(path, prefix))
        .map(|(_, area)| *area)
        .unwrap_or(DEFAULT_SCOPE)
}

fn check(
    path: &str,
    cookie_token: Option<&str>,
    key: Option<&SigningKey>,
    now_millis: i64,
) -> Result<Option<Claims>, AuthError> {
    if is_public_path(path) {
        return Ok(None);
    }

    let key = key.ok_or(AuthError::Unconfigured)?;
    let raw = cookie_token.ok_or(AuthError::MissingToken)?;
    let claims = token::verify_token(key, raw, now_millis)?;

    let scope = required_scope(path);
    if !claims.has_scope(scope.as_str()) {
        return Err(AuthError::MissingScope(scope.as_str()));
    }

    Ok(Some(claims))
}

pub fn evaluate(
    path: &str,
    cookie_token: Option<&str>,
    key: Option<&SigningKey>,
    now_millis: i64,
) -> Decision {
    match check(path, cookie_token, key, now_millis) {
        Ok(claims) => Decision::Admitted(claims),
        Err(err) => Decision::Redirected(err),
    }
}
