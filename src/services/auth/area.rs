/*
 * Responsibility
 * - ログイン可能なエリア (planta / capex / refinery) の定義
 * - エリアごとのパスワード表 (起動時に環境変数から読み込み、以降は読み取り専用)
 */
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use subtle::ConstantTimeEq;

/// A dashboard area. The lowercase name doubles as the scope string carried in tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Area {
    Planta,
    Capex,
    Refinery,
}

impl Area {
    pub const ALL: [Area; 3] = [Area::Planta, Area::Capex, Area::Refinery];

    pub fn as_str(&self) -> &'static str {
        match self {
            Area::Planta => "planta",
            Area::Capex => "capex",
            Area::Refinery => "refinery",
        }
    }

    /// Environment variable holding this area's password.
    pub fn password_env_key(&self) -> &'static str {
        match self {
            Area::Planta => "PLANTA_PASSWORD",
            Area::Capex => "CAPEX_PASSWORD",
            Area::Refinery => "REFINERY_PASSWORD",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownArea(pub String);

impl fmt::Display for UnknownArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown area: {}", self.0)
    }
}

impl std::error::Error for UnknownArea {}

impl FromStr for Area {
    type Err = UnknownArea;

    // Case-sensitive: "Planta" is not an area.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Area::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownArea(s.to_string()))
    }
}

/// Area → password table.
///
/// Passwords are operator-managed shared secrets compared as plain strings;
/// nothing here is hashed or persisted.
#[derive(Clone, Default)]
pub struct CredentialTable {
    passwords: HashMap<Area, String>,
}

impl fmt::Debug for CredentialTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only show which areas are configured
        let mut configured: Vec<&str> = self.passwords.keys().map(Area::as_str).collect();
        configured.sort_unstable();
        f.debug_struct("CredentialTable")
            .field("configured", &configured)
            .finish()
    }
}

impl CredentialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Empty passwords are ignored so an area can never be
    /// unlocked with an empty string.
    pub fn with(mut self, area: Area, password: impl Into<String>) -> Self {
        let password = password.into();
        if !password.is_empty() {
            self.passwords.insert(area, password);
        }
        self
    }

    pub fn is_configured(&self, area: Area) -> bool {
        self.passwords.contains_key(&area)
    }

    /// Full-string, case-sensitive equality. `None` when the area has no password configured.
    pub fn matches(&self, area: Area, candidate: &str) -> Option<bool> {
        let expected = self.passwords.get(&area)?;
        Some(bool::from(expected.as_bytes().ct_eq(candidate.as_bytes())))
    }
}
