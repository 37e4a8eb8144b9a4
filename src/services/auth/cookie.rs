//! `mvd_auth` cookie wire helpers.
//!
//! Set-Cookie values are built by hand; the attributes are fixed
//! (HttpOnly, Secure, SameSite=Lax, Path=/).

pub const AUTH_COOKIE_NAME: &str = "mvd_auth";

/// Set-Cookie value carrying a freshly issued token.
pub fn session_cookie(token: &str, max_age_seconds: u64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; Secure; SameSite=Lax; Max-Age={}",
        AUTH_COOKIE_NAME, token, max_age_seconds
    )
}

/// Set-Cookie value instructing the client to drop its token immediately.
pub fn clear_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; Secure; SameSite=Lax; Max-Age=0",
        AUTH_COOKIE_NAME
    )
}

/// Find `name` in a `Cookie:` request header. The first non-empty match wins.
pub fn token_from_cookie_header<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        let value = value.trim();
        (key.trim() == name && !value.is_empty()).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_named_cookie_among_others() {
        let header = "theme=dark; mvd_auth=abc.def; other=1";
        assert_eq!(
            token_from_cookie_header(header, AUTH_COOKIE_NAME),
            Some("abc.def")
        );
    }

    #[test]
    fn ignores_similar_names_and_empty_values() {
        assert_eq!(token_from_cookie_header("xmvd_auth=abc", AUTH_COOKIE_NAME), None);
        assert_eq!(token_from_cookie_header("mvd_auth=", AUTH_COOKIE_NAME), None);
        assert_eq!(token_from_cookie_header("", AUTH_COOKIE_NAME), None);
        assert_eq!(
            token_from_cookie_header("mvd_auth=; mvd_auth=x.y", AUTH_COOKIE_NAME),
            Some("x.y")
        );
    }

    #[test]
    fn whitespace_only_value_counts_as_empty() {
        assert_eq!(token_from_cookie_header("mvd_auth= ", AUTH_COOKIE_NAME), None);
        assert_eq!(
            token_from_cookie_header("mvd_auth=  ; mvd_auth= x.y ", AUTH_COOKIE_NAME),
            Some("x.y")
        );
    }

    #[test]
    fn session_cookie_has_fixed_attributes() {
        let c = session_cookie("p.s", 43_200);
        assert!(c.starts_with("mvd_auth=p.s;"));
        for attr in ["Path=/", "HttpOnly", "Secure", "SameSite=Lax", "Max-Age=43200"] {
            assert!(c.contains(attr), "missing {attr} in {c}");
        }
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let c = clear_cookie();
        assert!(c.starts_with("mvd_auth=;"));
        assert!(c.contains("Max-Age=0"));
    }
}
