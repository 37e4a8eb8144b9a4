use std::time::Duration;

use tracing::{info, warn};

use super::area::{Area, CredentialTable};
use super::codec::Claims;
use super::error::AuthError;
use super::gate::{self, Decision};
use super::signer::SigningKey;
use super::token;

pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Login result. Handlers map this into the cookie + JSON body.
#[derive(Clone, Debug)]
pub struct IssuedToken {
    pub token: String,
    pub area: Area,
    pub expires_at_millis: i64,
    pub max_age_seconds: u64,
}

/// Process-wide auth settings: signing key, area passwords, token lifetime.
///
/// Read-only after startup; shared across requests without locking.
#[derive(Clone, Debug)]
pub struct AuthService {
    signing_key: Option<SigningKey>,
    credentials: CredentialTable,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(
        signing_key: Option<SigningKey>,
        credentials: CredentialTable,
        token_ttl: Duration,
    ) -> Self {
        Self {
            signing_key,
            credentials,
            token_ttl,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.signing_key.is_some()
    }

    /// Check `password` against the area's configured password and, on a match,
    /// issue a token scoped to that area alone.
    pub fn login(&self, area: Area, password: &str, now_millis: i64) -> Result<IssuedToken, AuthError> {
        let Some(key) = self.signing_key.as_ref() else {
            warn!(%area, "login attempted without a signing secret");
            return Err(AuthError::Unconfigured);
        };

        match self.credentials.matches(area, password) {
            Some(true) => {}
            Some(false) => {
                warn!(%area, "login rejected: bad credentials");
                return Err(AuthError::BadCredentials);
            }
            None => {
                warn!(%area, "login attempted for an area without a password");
                return Err(AuthError::Unconfigured);
            }
        }

        let ttl_millis = i64::try_from(self.token_ttl.as_millis()).unwrap_or(i64::MAX);
        let expires_at_millis = now_millis.saturating_add(ttl_millis);
        let claims = Claims::new(expires_at_millis, [area.as_str()]);
        let token = token::issue_token(key, &claims);

        info!(%area, expires_at_millis, "issued auth token");

        Ok(IssuedToken {
            token,
            area,
            expires_at_millis,
            max_age_seconds: self.token_ttl.as_secs(),
        })
    }

    /// Run the access gate for one request.
    pub fn decide(&self, path: &str, cookie_token: Option<&str>, now_millis: i64) -> Decision {
        gate::evaluate(path, cookie_token, self.signing_key.as_ref(), now_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::codec;

    const NOW: i64 = 1_700_000_000_000;

    fn service() -> AuthService {
        AuthService::new(
            Some(SigningKey::new(b"svc-secret").unwrap()),
            CredentialTable::new()
                .with(Area::Planta, "planta-pw")
                .with(Area::Capex, "capex-pw"),
            DEFAULT_TOKEN_TTL,
        )
    }

    #[test]
    fn login_issues_single_scope_token_for_twelve_hours() {
        let issued = service().login(Area::Planta, "planta-pw", NOW).unwrap();

        assert_eq!(issued.area, Area::Planta);
        assert_eq!(issued.expires_at_millis, NOW + 12 * 60 * 60 * 1000);
        assert_eq!(issued.max_age_seconds, 43_200);

        let (payload, _) = issued.token.split_once('.').unwrap();
        let claims = codec::decode_claims(payload).unwrap();
        assert_eq!(claims, Claims::new(issued.expires_at_millis, ["planta"]));
    }

    #[test]
    fn issued_token_passes_gate_for_its_area_only() {
        let svc = service();
        let issued = svc.login(Area::Planta, "planta-pw", NOW).unwrap();

        assert!(svc.decide("/planta", Some(&issued.token), NOW + 1).is_admitted());
        assert!(!svc.decide("/capex", Some(&issued.token), NOW + 1).is_admitted());
    }

    #[test]
    fn wrong_password_is_bad_credentials() {
        let err = service().login(Area::Capex, "CAPEX-PW", NOW).unwrap_err();
        assert!(matches!(err, AuthError::BadCredentials));
    }

    #[test]
    fn area_without_password_is_unconfigured() {
        let err = service().login(Area::Refinery, "anything", NOW).unwrap_err();
        assert!(matches!(err, AuthError::Unconfigured));
    }

    #[test]
    fn missing_secret_refuses_login_and_gate() {
        let svc = AuthService::new(
            None,
            CredentialTable::new().with(Area::Capex, "capex-pw"),
            DEFAULT_TOKEN_TTL,
        );
        assert!(!svc.is_configured());
        assert!(matches!(
            svc.login(Area::Capex, "capex-pw", NOW),
            Err(AuthError::Unconfigured)
        ));
        assert!(!svc.decide("/capex", Some("a.b"), NOW).is_admitted());
    }

    #[test]
    fn relogin_supersedes_on_the_client_only() {
        let svc = service();
        let first = svc.login(Area::Capex, "capex-pw", NOW).unwrap();
        let second = svc.login(Area::Capex, "capex-pw", NOW + 1_000).unwrap();

        // Both stay valid: nothing is recorded server-side
        assert_ne!(first.token, second.token);
        assert!(svc.decide("/capex", Some(&first.token), NOW + 2_000).is_admitted());
        assert!(svc.decide("/capex", Some(&second.token), NOW + 2_000).is_admitted());
    }
}
