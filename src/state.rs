/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: 署名鍵 + エリアパスワード + TTL (起動後は読み取り専用)
 * - Clone 前提で持つ (内部は Arc)
 */
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{AuthService, SigningKey};

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self { auth }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let signing_key = config
            .auth_secret
            .as_deref()
            .map(|secret| SigningKey::new(secret.as_bytes()))
            .transpose()
            .map_err(|e| anyhow::anyhow!("invalid AUTH_SECRET: {e}"))?;

        let auth = AuthService::new(
            signing_key,
            config.area_passwords.clone(),
            config.token_ttl,
        );

        Ok(Self::new(Arc::new(auth)))
    }
}
