/*
 * Responsibility
 * - トークン文字列 `<payload>.<signature>` の組み立てと検証
 * - codec (base64url/JSON) と signer (HMAC) の合成
 */
use super::codec::{self, Claims};
use super::error::AuthError;
use super::signer::SigningKey;

pub const TOKEN_DELIMITER: char = '.';

pub fn issue_token(key: &SigningKey, claims: &Claims) -> String {
    let payload = codec::encode_claims(claims);
    let signature = codec::encode_bytes(&key.sign(&payload));
    format!("{payload}{TOKEN_DELIMITER}{signature}")
}

/// Signature first, then claims, then expiry. Scope is the caller's concern.
pub fn verify_token(key: &SigningKey, token: &str, now_millis: i64) -> Result<Claims, AuthError> {
    let mut parts = token.split(TOKEN_DELIMITER);
    let (Some(payload), Some(signature), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AuthError::MalformedToken);
    };

    let signature = codec::decode_bytes(signature)?;
    if !key.verify(payload, &signature) {
        return Err(AuthError::SignatureMismatch);
    }

    let claims = codec::decode_claims(payload)?;
    if claims.is_expired_at(now_millis) {
        return Err(AuthError::Expired);
    }

    Ok(claims)
}
