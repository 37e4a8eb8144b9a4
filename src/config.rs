/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, AUTH_SECRET, エリアごとのパスワードなど)
 * - 設定値のバリデーション (不正なら起動失敗)
 *
 * Notes
 * - AUTH_SECRET が無くても起動はする。その場合 gate が全ての保護パスを拒否する (fail closed)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::services::auth::{Area, CredentialTable, service::DEFAULT_TOKEN_TTL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // None → unconfigured; every protected request is redirected
    pub auth_secret: Option<String>,
    pub area_passwords: CredentialTable,
    pub token_ttl: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print the secret
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("auth_secret_set", &self.auth_secret.is_some())
            .field("area_passwords", &self.area_passwords)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let auth_secret = non_empty_var("AUTH_SECRET");

        let area_passwords = Area::ALL
            .into_iter()
            .fold(CredentialTable::new(), |table, area| {
                match non_empty_var(area.password_env_key()) {
                    Some(password) => table.with(area, password),
                    None => table,
                }
            });

        let token_ttl = match std::env::var("AUTH_TOKEN_TTL_SECONDS") {
            Ok(raw) => parse_ttl(&raw).ok_or(ConfigError::Invalid("AUTH_TOKEN_TTL_SECONDS"))?,
            Err(_) => DEFAULT_TOKEN_TTL,
        };

        Ok(Self {
            addr,
            app_env,
            auth_secret,
            area_passwords,
            token_ttl,
        })
    }
}

fn parse_ttl(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
