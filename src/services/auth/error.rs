use thiserror::Error;

use super::codec::DecodeError;

/// Why a token or login was refused.
///
/// The gate collapses every variant into the same redirect; the kinds exist
/// for logging and tests only.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no signing secret configured")]
    Unconfigured,
    #[error("no auth cookie")]
    MissingToken,
    #[error("token is not <payload>.<signature>")]
    MalformedToken,
    #[error("token decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("signature mismatch")]
    SignatureMismatch,
    #[error("token expired")]
    Expired,
    #[error("missing scope: {0}")]
    MissingScope(&'static str),
    #[error("bad credentials")]
    BadCredentials,
}
