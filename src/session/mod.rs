/**
 * Session Resolution
 *
 * The board consumes sessions, it never issues them: the external auth
 * service signs a JWT and sets it as the `session` cookie, and this module
 * reads it back. A resolved session carries the user identity plus the
 * supporter (VIP) flag and last-donation timestamp that unlock the edit
 * action and the thank-you panel.
 *
 * `SessionProvider` is a trait so tests can substitute a fixed provider;
 * the production implementation is `JwtSessionProvider`.
 */

use axum::extract::FromRequestParts;
use axum::http::{header::COOKIE, request::Parts, HeaderMap, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::server::state::AppState;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "session";

/// The caller's identity for one request
///
/// Read once per page load; lifecycle is owned entirely by the external
/// session provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// User identifier
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Supporter (VIP) flag
    pub supporter: bool,
    /// Timestamp of the user's last donation, when known
    pub last_donate: Option<DateTime<Utc>>,
}

/// JWT claims carried by the session cookie
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User ID
    sub: String,
    /// Display name
    name: String,
    /// Supporter flag
    #[serde(default)]
    vip: bool,
    /// Last donation (Unix timestamp, seconds)
    #[serde(default)]
    last_donate: Option<i64>,
    /// Expiration time (Unix timestamp)
    exp: u64,
    /// Issued at time (Unix timestamp)
    iat: u64,
}

/// Read operation against the external session service
///
/// Returns `None` when the request carries no resolvable session, which the
/// page route turns into a redirect and the API routes into a 401.
pub trait SessionProvider: Send + Sync {
    /// Resolve the session for a request from its headers
    fn resolve(&self, headers: &HeaderMap) -> Option<Session>;
}

/// Session provider that verifies the `session` cookie's JWT
pub struct JwtSessionProvider {
    secret: String,
}

impl JwtSessionProvider {
    /// Create a provider verifying tokens against the given shared secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }
}

impl SessionProvider for JwtSessionProvider {
    fn resolve(&self, headers: &HeaderMap) -> Option<Session> {
        let token = cookie_value(headers, SESSION_COOKIE)?;

        let claims = match verify_token(&token, &self.secret) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::warn!("Invalid session token: {:?}", e);
                return None;
            }
        };

        Some(Session {
            user_id: claims.sub,
            name: claims.name,
            supporter: claims.vip,
            last_donate: claims
                .last_donate
                .and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
        })
    }
}

/// Extract a named cookie from the `Cookie` header
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let header = headers.get(COOKIE)?.to_str().ok()?;

    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(str::to_string)
}

/// Encode a session as a signed token
///
/// Token issuance belongs to the external auth service; this helper exists
/// for tests and operational tooling that need to mint a valid cookie.
/// Tokens expire after 30 days.
pub fn create_token(session: &Session, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let claims = Claims {
        sub: session.user_id.clone(),
        name: session.name.clone(),
        vip: session.supporter,
        last_donate: session.last_donate.map(|t| t.timestamp()),
        exp: now + 30 * 24 * 60 * 60,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let token_data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(token_data.claims)
}

/// Axum extractor for the caller's session
///
/// Used by the API handlers; rejects with 401 when the request carries no
/// resolvable session. The page route resolves the session itself because
/// its unauthenticated answer is a redirect, not an error.
#[derive(Clone, Debug)]
pub struct SessionUser(pub Session);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .sessions
            .resolve(&parts.headers)
            .map(SessionUser)
            .ok_or_else(|| {
                tracing::warn!("Request without a resolvable session");
                StatusCode::UNAUTHORIZED
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn supporter_session() -> Session {
        Session {
            user_id: "u1".to_string(),
            name: "Ana".to_string(),
            supporter: true,
            last_donate: Utc.timestamp_opt(1_700_000_000, 0).single(),
        }
    }

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_token_round_trip() {
        let session = supporter_session();
        let token = create_token(&session, "test-secret").unwrap();

        let provider = JwtSessionProvider::new("test-secret");
        let headers = headers_with_cookie(&format!("session={}", token));

        let resolved = provider.resolve(&headers).unwrap();
        assert_eq!(resolved, session);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token(&supporter_session(), "test-secret").unwrap();

        let provider = JwtSessionProvider::new("other-secret");
        let headers = headers_with_cookie(&format!("session={}", token));

        assert!(provider.resolve(&headers).is_none());
    }

    #[test]
    fn test_missing_cookie() {
        let provider = JwtSessionProvider::new("test-secret");
        assert!(provider.resolve(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_garbage_token() {
        let provider = JwtSessionProvider::new("test-secret");
        let headers = headers_with_cookie("session=not.a.token");
        assert!(provider.resolve(&headers).is_none());
    }

    #[test]
    fn test_cookie_value_among_others() {
        let headers = headers_with_cookie("theme=dark; session=abc; lang=pt");
        assert_eq!(cookie_value(&headers, "session").as_deref(), Some("abc"));
    }

    #[test]
    fn test_cookie_name_is_not_a_prefix_match() {
        let headers = headers_with_cookie("session_hint=abc");
        assert_eq!(cookie_value(&headers, "session"), None);
    }
}
