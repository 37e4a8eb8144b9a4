/*
 * Responsibility
 * - Claims ↔ URL-safe テキスト (base64url(JSON)) の変換
 * - 署名バイト列 ↔ 同じアルファベットのテキスト変換
 *
 * Notes
 * - 送信形式はパディングなし。デコード時はパディングの有無を問わない
 * - scopes 欠落は空集合、expiresAtMillis 欠落は「期限切れ」として扱う (DecodeError にはしない)
 */
use std::collections::BTreeSet;

use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const TOKEN_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Expiry used when a payload carries no usable `expiresAtMillis`.
/// Any clock reading is past it, so such a token never validates.
pub const EXPIRED_SENTINEL: i64 = i64::MIN;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64url text: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("malformed claims: {0}")]
    Json(#[from] serde_json::Error),
}

/// Signed attributes of an authenticated session.
///
/// `scopes` is a set: ordering and duplicates carry no meaning, and the
/// `BTreeSet` keeps the serialized form canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub expires_at_millis: i64,
    pub scopes: BTreeSet<String>,
}

impl Claims {
    pub fn new<I, S>(expires_at_millis: i64, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expires_at_millis,
            scopes: scopes.into_iter().map(Into::into).collect(),
        }
    }

    /// Valid strictly before `expires_at_millis`; a token expiring exactly now is expired.
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        now_millis >= self.expires_at_millis
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }
}

// Lenient wire shape: absent fields are tolerated, wrong types are not.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClaimsWire {
    #[serde(default)]
    expires_at_millis: Option<serde_json::Number>,
    #[serde(default)]
    scopes: Option<Vec<String>>,
}

fn coerce_expiry(raw: Option<serde_json::Number>) -> i64 {
    let Some(n) = raw else {
        return EXPIRED_SENTINEL;
    };
    if let Some(v) = n.as_i64() {
        return v;
    }
    match n.as_f64() {
        // `as` saturates for out-of-range floats
        Some(v) if v.is_finite() => v as i64,
        _ => EXPIRED_SENTINEL,
    }
}

pub fn encode_bytes(bytes: &[u8]) -> String {
    TOKEN_BASE64.encode(bytes)
}

pub fn decode_bytes(text: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(TOKEN_BASE64.decode(text)?)
}

pub fn encode_claims(claims: &Claims) -> String {
    // Serializing an i64 and a set of strings cannot fail
    let json = serde_json::to_vec(claims).unwrap_or_default();
    encode_bytes(&json)
}

pub fn decode_claims(payload: &str) -> Result<Claims, DecodeError> {
    let bytes = decode_bytes(payload)?;
    let wire: ClaimsWire = serde_json::from_slice(&bytes)?;

    Ok(Claims {
        expires_at_millis: coerce_expiry(wire.expires_at_millis),
        scopes: wire.scopes.unwrap_or_default().into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn payload_of(json: &str) -> String {
        encode_bytes(json.as_bytes())
    }

    #[test]
    fn encodes_camel_case_json_without_padding() {
        let claims = Claims::new(1_700_000_000_000, ["planta"]);
        let payload = encode_claims(&claims);

        assert!(!payload.contains('='));
        assert!(!payload.contains('+'));
        assert!(!payload.contains('/'));

        let json = String::from_utf8(decode_bytes(&payload).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"expiresAtMillis":1700000000000,"scopes":["planta"]}"#
        );
    }

    #[test]
    fn missing_scopes_decode_to_empty_set() {
        let claims = decode_claims(&payload_of(r#"{"expiresAtMillis":42}"#)).unwrap();
        assert_eq!(claims.expires_at_millis, 42);
        assert!(claims.scopes.is_empty());
    }

    #[test]
    fn missing_or_null_expiry_is_already_expired() {
        for json in [r#"{"scopes":["capex"]}"#, r#"{"expiresAtMillis":null}"#] {
            let claims = decode_claims(&payload_of(json)).unwrap();
            assert_eq!(claims.expires_at_millis, EXPIRED_SENTINEL);
            assert!(claims.is_expired_at(0));
            assert!(claims.is_expired_at(i64::MIN));
        }
    }

    #[test]
    fn fractional_expiry_is_truncated() {
        let claims = decode_claims(&payload_of(r#"{"expiresAtMillis":1500.9}"#)).unwrap();
        assert_eq!(claims.expires_at_millis, 1500);
    }

    #[test]
    fn wrong_typed_fields_fail() {
        for json in [
            r#"{"expiresAtMillis":"soon","scopes":[]}"#,
            r#"{"expiresAtMillis":1,"scopes":"capex"}"#,
            r#"{"expiresAtMillis":1,"scopes":[1,2]}"#,
            r#"[1,2,3]"#,
            r#"not json"#,
        ] {
            assert!(
                matches!(decode_claims(&payload_of(json)), Err(DecodeError::Json(_))),
                "{json} should not decode"
            );
        }
    }

    #[test]
    fn rejects_text_outside_the_alphabet() {
        assert!(matches!(
            decode_claims("eyJ*fQ"),
            Err(DecodeError::Base64(_))
        ));
        assert!(decode_bytes("ab+/").is_err());
        assert!(decode_bytes("a").is_err());
    }

    #[test]
    fn accepts_padded_input() {
        let padded = base64::engine::general_purpose::URL_SAFE.encode(b"ab");
        assert!(padded.ends_with('='));
        assert_eq!(decode_bytes(&padded).unwrap(), b"ab");
        assert_eq!(decode_bytes("YWI").unwrap(), b"ab");
    }

    #[test]
    fn duplicate_scopes_collapse() {
        let claims =
            decode_claims(&payload_of(r#"{"expiresAtMillis":1,"scopes":["capex","capex"]}"#))
                .unwrap();
        assert_eq!(claims.scopes.len(), 1);
    }

    proptest! {
        #[test]
        fn claims_round_trip(
            expires in any::<i64>(),
            scopes in proptest::collection::btree_set("[a-z]{1,12}", 0..4),
        ) {
            let claims = Claims { expires_at_millis: expires, scopes };
            let decoded = decode_claims(&encode_claims(&claims)).unwrap();
            prop_assert_eq!(decoded, claims);
        }

        #[test]
        fn bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            prop_assert_eq!(decode_bytes(&encode_bytes(&bytes)).unwrap(), bytes);
        }
    }
}
