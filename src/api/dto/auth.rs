/*
 * Responsibility
 * - login / logout の request/response DTO
 * - 入力チェック (欠落・空文字・未知エリア) はパスワード照合より前に行う
 */
use serde::{Deserialize, Serialize};

use crate::services::auth::Area;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub area: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn validate(self) -> Result<(Area, String), &'static str> {
        let area = self
            .area
            .filter(|a| !a.is_empty())
            .ok_or("area is required")?;
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or("password is required")?;
        let area = area.parse::<Area>().map_err(|_| "unknown area")?;

        Ok((area, password))
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub area: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub ok: bool,
}
