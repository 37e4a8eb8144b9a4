//! HMAC-SHA256 signing of token payloads.
//!
//! The MAC covers the UTF-8 bytes of the *encoded* payload text, so any
//! change to the transmitted payload characters invalidates the signature.
//! There is no algorithm identifier in the token: one secret, one MAC.
//! Rotating the secret invalidates every token issued under the old one.

use std::fmt;

use hmac::{Hmac, Mac, digest::InvalidLength};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_LEN: usize = 32;

pub type Signature = [u8; SIGNATURE_LEN];

/// Process-wide signing secret, pre-keyed once at startup.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct SigningKey {
    mac: HmacSha256,
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(..)")
    }
}

impl SigningKey {
    pub fn new(secret: &[u8]) -> Result<Self, InvalidLength> {
        Ok(Self {
            mac: HmacSha256::new_from_slice(secret)?,
        })
    }

    pub fn sign(&self, payload: &str) -> Signature {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());

        let mut out = [0u8; SIGNATURE_LEN];
        out.copy_from_slice(&mac.finalize().into_bytes());
        out
    }

    /// Recompute and compare in constant time.
    ///
    /// A length mismatch is simply "not equal"; for equal lengths the
    /// comparison touches every byte regardless of where they differ.
    pub fn verify(&self, payload: &str, signature: &[u8]) -> bool {
        let expected = self.sign(payload);
        bool::from(expected.as_slice().ct_eq(signature))
    }
}
