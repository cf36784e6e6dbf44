use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::http::{HeaderMap, HeaderValue, header};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::policy::Role;

// The three cookies that make up a session. All scoped to Path=/.
// A session is valid only when all three are present and mutually consistent.
pub const TOKEN_COOKIE: &str = "token";
pub const USER_COOKIE: &str = "user";
pub const ROLE_COOKIE: &str = "role";

/// Lifetime of an issued session token. The sliding inactivity window in
/// [`ActivityTracker`] is enforced independently of this.
pub const TOKEN_TTL_SECS: i64 = 8 * 60 * 60;

/// Claims
///
/// The payload structure signed into every session token. Verified against the
/// shared server secret on every gated request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (sub): the UUID of the user, keyed to the `users` table.
    pub sub: Uuid,
    /// Expiration time (exp): timestamp after which the token must be rejected.
    pub exp: usize,
    /// Issued at (iat): timestamp the token was minted.
    pub iat: usize,
}

/// Signs a fresh session token for a user. Returns `None` only if the signing
/// backend rejects the key, which a correctly configured secret never triggers.
pub fn issue_token(user_id: Uuid, secret: &str) -> Option<String> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        iat: now as usize,
        exp: (now + TOKEN_TTL_SECS) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .ok()
}

/// Verifies a session token's signature and structure against the shared
/// secret.
///
/// Every failure mode (bad signature, malformed token, expired `exp`) is
/// normalized to `None`: an unverifiable token is indistinguishable from no
/// token at all, since the user-visible remedy (re-login) is the same.
pub fn verify_token(token: &str, secret: &str) -> Option<Claims> {
    let mut validation = Validation::default();
    validation.validate_exp = true;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .ok()
}

/// Extracts a single cookie's value from a request's `Cookie` header.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())?
        .split(';')
        .find_map(|pair| {
            let mut parts = pair.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name => Some(value.to_string()),
                _ => None,
            }
        })
}

/// Canonical wire encoding of the `role` cookie: the JSON-quoted label
/// (`"Admin"` is stored as `"\"Admin\""`).
pub fn encode_role_cookie(role: Role) -> String {
    serde_json::to_string(role.label()).unwrap_or_default()
}

/// Decodes a `role` cookie through the single shared path every consumer uses.
///
/// Accepts the canonical JSON-quoted form and the bare legacy form; both
/// resolve to the same `Role`. Anything else, including labels outside the
/// closed role set, is `None`, and callers treat `None` as a denial.
pub fn decode_role_cookie(raw: &str) -> Option<Role> {
    if let Ok(label) = serde_json::from_str::<String>(raw) {
        return Role::from_label(&label);
    }
    Role::from_label(raw)
}

/// The Set-Cookie headers issued on login: the signed token (HttpOnly), the
/// JSON-encoded username, and the JSON-encoded role label.
pub fn session_cookies(token: &str, username: &str, role: Role) -> Vec<String> {
    vec![
        format!("{TOKEN_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax"),
        format!(
            "{USER_COOKIE}={}; Path=/; SameSite=Lax",
            serde_json::to_string(username).unwrap_or_default()
        ),
        format!(
            "{ROLE_COOKIE}={}; Path=/; SameSite=Lax",
            encode_role_cookie(role)
        ),
    ]
}

/// The Set-Cookie headers that destroy a session (logout or inactivity
/// expiry): all three cookies blanked with Max-Age=0.
pub fn clearing_cookies() -> Vec<String> {
    [TOKEN_COOKIE, USER_COOKIE, ROLE_COOKIE]
        .iter()
        .map(|name| format!("{name}=; Path=/; Max-Age=0"))
        .collect()
}

/// Appends a batch of Set-Cookie values to a response header map. Values that
/// do not form a valid header (never the case for our own cookie builders) are
/// skipped rather than failing the response.
pub fn apply_cookies(headers: &mut HeaderMap, cookies: &[String]) {
    for cookie in cookies {
        if let Ok(value) = HeaderValue::from_str(cookie) {
            headers.append(header::SET_COOKIE, value);
        }
    }
}

/// ActivityTracker
///
/// Enforces the sliding inactivity timeout. Each authenticated request calls
/// [`ActivityTracker::touch`], which lazily checks the recorded last-activity
/// timestamp against the window and then refreshes it; there is no ambient
/// timer to arm or race against. State is in memory only; a restart forgets
/// all activity, and the next request simply starts a fresh window.
pub struct ActivityTracker {
    window: Duration,
    last_seen: Mutex<HashMap<Uuid, Instant>>,
}

/// The concrete type used to share the tracker across the application state.
pub type SessionState = Arc<ActivityTracker>;

impl ActivityTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_seen: Mutex::new(HashMap::new()),
        }
    }

    /// Records activity for a user. Returns `false` if the user's previous
    /// activity is older than the window: the session has expired and the
    /// caller must treat the request as unauthenticated. An unknown user
    /// (first request, or first after a restart) starts a fresh window.
    pub fn touch(&self, user: Uuid) -> bool {
        let mut seen = self.last_seen.lock().unwrap();
        if let Some(last) = seen.get(&user) {
            if last.elapsed() > self.window {
                seen.remove(&user);
                return false;
            }
        }
        seen.insert(user, Instant::now());
        true
    }

    /// Starts a fresh window for a user. Called on login.
    pub fn reset(&self, user: Uuid) {
        self.last_seen.lock().unwrap().insert(user, Instant::now());
    }

    /// Drops a user's activity record. Called on logout.
    pub fn forget(&self, user: Uuid) {
        self.last_seen.lock().unwrap().remove(&user);
    }
}
