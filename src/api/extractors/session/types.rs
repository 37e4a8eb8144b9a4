/*
 * Responsibility
 * - Handler から見える「認証済みセッション」の型
 * - access middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - 署名/期限/スコープの検証は middleware/services 側の責務
 */
use std::collections::BTreeSet;

use crate::services::auth::Claims;

/// Verified claims of the request's `mvd_auth` token.
#[derive(Debug, Clone)]
pub struct Session {
    claims: Claims,
}

impl Session {
    pub fn new(claims: Claims) -> Self {
        Self { claims }
    }

    pub fn scopes(&self) -> &BTreeSet<String> {
        &self.claims.scopes
    }

    pub fn expires_at_millis(&self) -> i64 {
        self.claims.expires_at_millis
    }
}
