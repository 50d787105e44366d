//! Server-side session cookies.
//!
//! The session travels as two cookies: `token` (http-only) and `userId`.
//! Values may arrive percent-encoded and, for tokens written by older
//! clients, wrapped in JSON quotes or prefixed with `Bearer `.

pub const TOKEN_COOKIE: &str = "token";
pub const USER_ID_COOKIE: &str = "userId";

/// Session cookie lifetime: one day.
pub const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24;

/// Look up a cookie by name in a `Cookie` request header and percent-decode it.
#[must_use]
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| {
            let value = value.trim();
            urlencoding::decode(value).map_or_else(|_| value.to_string(), |v| v.into_owned())
        })
}

/// Clean a stored credential: trim, drop surrounding JSON quotes and a
/// leading `Bearer ` prefix. Returns `None` when nothing is left.
#[must_use]
pub fn normalize_token(raw: &str) -> Option<String> {
    let mut token = raw.trim();

    // A lone `"` both starts and ends the value and leaves nothing.
    if token.starts_with('"') && token.ends_with('"') {
        token = token
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .unwrap_or_default();
    }

    if token
        .get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("bearer "))
    {
        token = token[7..].trim();
    }

    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// `Set-Cookie` values that establish a session.
#[must_use]
pub fn login_cookies(token: &str, user_id: i64) -> [String; 2] {
    [
        format!(
            "{TOKEN_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_MAX_AGE_SECS}",
            urlencoding::encode(token)
        ),
        format!("{USER_ID_COOKIE}={user_id}; Path=/; SameSite=Lax; Max-Age={SESSION_MAX_AGE_SECS}"),
    ]
}

/// `Set-Cookie` values that expire both session cookies.
#[must_use]
pub fn logout_cookies() -> [String; 2] {
    [
        format!("{TOKEN_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"),
        format!("{USER_ID_COOKIE}=; Path=/; SameSite=Lax; Max-Age=0"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn finds_cookie_among_others() {
        let header = "theme=dark; token=abc.def.ghi; userId=42";
        assert_eq!(cookie_value(header, "token").as_deref(), Some("abc.def.ghi"));
        assert_eq!(cookie_value(header, "userId").as_deref(), Some("42"));
        assert!(cookie_value(header, "missing").is_none());
    }

    #[test]
    fn cookie_value_is_percent_decoded() {
        let header = "token=%22abc.def.ghi%22";
        assert_eq!(cookie_value(header, "token").as_deref(), Some("\"abc.def.ghi\""));
    }

    #[test]
    fn cookie_name_must_match_exactly() {
        assert!(cookie_value("xtoken=abc", "token").is_none());
    }

    #[rstest]
    #[case("abc.def.ghi", Some("abc.def.ghi"))]
    #[case("  abc.def.ghi \n", Some("abc.def.ghi"))]
    #[case("\"abc.def.ghi\"", Some("abc.def.ghi"))]
    #[case("Bearer abc.def.ghi", Some("abc.def.ghi"))]
    #[case("bearer   abc.def.ghi", Some("abc.def.ghi"))]
    #[case("\"Bearer abc.def.ghi\"", Some("abc.def.ghi"))]
    #[case("", None)]
    #[case("\"\"", None)]
    #[case("\"", None)]
    #[case("  \"  ", None)]
    fn normalizes_tokens(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(normalize_token(raw).as_deref(), expected);
    }

    #[test]
    fn login_cookie_attributes() {
        let [token, user] = login_cookies("abc.def", 42);
        assert_eq!(
            token,
            "token=abc.def; Path=/; HttpOnly; SameSite=Lax; Max-Age=86400"
        );
        assert_eq!(user, "userId=42; Path=/; SameSite=Lax; Max-Age=86400");
    }

    #[test]
    fn logout_cookies_expire_both() {
        for cookie in logout_cookies() {
            assert!(cookie.ends_with("Max-Age=0"));
        }
    }
}
