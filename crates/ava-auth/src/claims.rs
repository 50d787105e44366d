use ava_core::entities::TokenUser;
use ava_core::enums::Role;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Decoded session token payload.
///
/// The signature is never checked here: the backend validates every request.
/// This is only used to pick routes and show who is logged in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuthPayload {
    #[serde(default)]
    pub sub: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    /// Role claim. The backend sends either a single string or a list.
    #[serde(default, deserialize_with = "one_or_many")]
    pub role: Vec<String>,
    #[serde(default)]
    pub user: Option<TokenUser>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
}

impl AuthPayload {
    /// Best-known user id: `id` claim, then the embedded user, then `sub`.
    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.id
            .clone()
            .or_else(|| self.user.as_ref().map(|u| u.id.to_string()))
            .or_else(|| (!self.sub.is_empty()).then(|| self.sub.clone()))
    }

    /// First recognised role from the role claim, then from the embedded user.
    #[must_use]
    pub fn primary_role(&self) -> Option<Role> {
        self.role
            .iter()
            .find_map(|r| Role::parse(r))
            .or_else(|| self.user.as_ref().and_then(|u| u.role.role()))
    }

    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }
}

/// Decode a token payload, rejecting malformed or expired tokens.
#[must_use]
pub fn decode_payload(token: &str) -> Option<AuthPayload> {
    decode_payload_at(token, Utc::now())
}

/// [`decode_payload`] against an explicit clock.
#[must_use]
pub fn decode_payload_at(token: &str, now: DateTime<Utc>) -> Option<AuthPayload> {
    let segment = token.split('.').nth(1)?;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|error| tracing::debug!(%error, "token payload is not base64url"))
        .ok()?;
    let payload: AuthPayload = serde_json::from_slice(&bytes)
        .map_err(|error| tracing::debug!(%error, "token payload is not a JSON object"))
        .ok()?;

    if let Some(exp) = payload.exp
        && now.timestamp() >= exp
    {
        tracing::debug!(exp, "token expired");
        return None;
    }

    Some(payload)
}

/// Whether the payload carries at least one of `required` in its role claim.
#[must_use]
pub fn has_any_role(payload: Option<&AuthPayload>, required: &[&str]) -> bool {
    payload.is_some_and(|p| required.iter().any(|r| p.role.iter().any(|have| have == r)))
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(role)) => vec![role],
        Some(OneOrMany::Many(roles)) => roles,
    })
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
    }

    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn make_jwt(payload: &str) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(r#"{"alg":"HS256"}"#);
        let payload = engine.encode(payload);
        let signature = engine.encode("fake_sig");
        format!("{header}.{payload}.{signature}")
    }

    #[test]
    fn decodes_list_role_and_embedded_user() {
        let exp = Utc::now().timestamp() + 3600;
        let jwt = make_jwt(&format!(
            r#"{{"sub":"ana@example.com","role":["TEACHER"],"exp":{exp},
                "user":{{"id":9,"email":"ana@example.com","nome":"Ana","role":{{"name":"TEACHER"}}}}}}"#
        ));
        let payload = decode_payload(&jwt).expect("valid payload");
        assert_eq!(payload.role, vec!["TEACHER".to_string()]);
        assert_eq!(payload.user_id().as_deref(), Some("9"));
        assert_eq!(payload.primary_role(), Some(Role::Teacher));
        assert_eq!(payload.expires_at().map(|d| d.timestamp()), Some(exp));
    }

    #[test]
    fn decodes_single_string_role_and_numeric_id() {
        let jwt = make_jwt(r#"{"sub":"x","id":12,"role":"ADMIN"}"#);
        let payload = decode_payload(&jwt).expect("valid payload");
        assert_eq!(payload.role, vec!["ADMIN".to_string()]);
        assert_eq!(payload.id.as_deref(), Some("12"));
    }

    #[test]
    fn expired_token_is_rejected() {
        let exp = Utc::now().timestamp() - 10;
        let jwt = make_jwt(&format!(r#"{{"sub":"x","exp":{exp}}}"#));
        assert!(decode_payload(&jwt).is_none());
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let jwt = make_jwt(r#"{"sub":"x","exp":1000}"#);
        let at = |secs| DateTime::from_timestamp(secs, 0).expect("timestamp");
        assert!(decode_payload_at(&jwt, at(999)).is_some());
        assert!(decode_payload_at(&jwt, at(1000)).is_none());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(decode_payload("").is_none());
        assert!(decode_payload("not-a-jwt").is_none());
        assert!(decode_payload("header.!!!invalid!!!.sig").is_none());
        let not_json = format!(
            "h.{}.s",
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("plain text")
        );
        assert!(decode_payload(&not_json).is_none());
    }

    #[test]
    fn padded_payload_segment_is_accepted() {
        let padded = format!(
            "h.{}.s",
            base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"ab"}"#)
        );
        assert_eq!(decode_payload(&padded).map(|p| p.sub).as_deref(), Some("ab"));
    }

    #[test]
    fn has_any_role_matches_one_of() {
        let jwt = make_jwt(r#"{"sub":"x","role":["USER","ADMIN"]}"#);
        let payload = decode_payload(&jwt);
        assert!(has_any_role(payload.as_ref(), &["MANAGER", "ADMIN"]));
        assert!(!has_any_role(payload.as_ref(), &["TEACHER"]));
        assert!(!has_any_role(None, &["ADMIN"]));
    }
}
