use axum::{
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
};
use uuid::Uuid;

use crate::{
    config::{AppConfig, Env},
    policy::{Feature, Role},
    repository::RepositoryState,
    session::{self, SessionState},
};

/// AuthUser
///
/// The resolved identity of an authenticated API request: the user's ID, the
/// display username, and the role resolved through the closed role set.
/// Handlers take this as an argument and gate resources with
/// [`require_feature`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

/// AuthUser Extractor Implementation
///
/// Implements axum's FromRequestParts trait, making AuthUser usable as a
/// function argument in any authenticated handler, and keeping authentication
/// out of handler bodies entirely.
///
/// Resolution order:
/// 1. Dependency resolution: Repository, AppConfig and the session tracker
///    from the application state.
/// 2. Local bypass: development-time access via the 'x-user-id' header,
///    active only in `Env::Local` and still verified against the repository.
/// 3. Token extraction: the dashboard's HTTP client mirrors the session
///    cookie into a custom `token` header on every request; same-origin
///    fetches fall back to the cookie itself.
/// 4. Verification: signature/structure check, then the sliding-inactivity
///    touch. An idle session is rejected here, lazily, with no timer.
/// 5. DB lookup: the user must still exist; the stored role label is the
///    authoritative one and must be inside the closed role set.
///
/// Rejection: 401 for anything session-shaped (missing/invalid/expired/idle
/// token, deleted user; all remedied by re-login), 403 for a user whose
/// stored role label is not recognized.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    RepositoryState: FromRef<S>,
    AppConfig: FromRef<S>,
    SessionState: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // 1. Dependency resolution
        let repo = RepositoryState::from_ref(state);
        let config = AppConfig::from_ref(state);
        let sessions = SessionState::from_ref(state);

        // 2. Local development bypass check. Guarded by the Env check; the
        // provided UUID must map to a real user so roles are loaded correctly.
        if config.env == Env::Local {
            if let Some(user_id_header) = parts.headers.get("x-user-id") {
                if let Ok(id_str) = user_id_header.to_str() {
                    if let Ok(user_id) = Uuid::parse_str(id_str) {
                        if let Some(user) = repo.get_user(user_id).await {
                            let role =
                                Role::from_label(&user.role).ok_or(StatusCode::FORBIDDEN)?;
                            return Ok(AuthUser {
                                id: user.id,
                                username: user.username,
                                role,
                            });
                        }
                    }
                }
            }
        }
        // In production, or when the bypass did not resolve, fall through to
        // the standard token flow.

        // 3. Token extraction: custom header first, session cookie second.
        let token = parts
            .headers
            .get("token")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .or_else(|| session::cookie_value(&parts.headers, session::TOKEN_COOKIE))
            .ok_or(StatusCode::UNAUTHORIZED)?;

        // 4. Verification. All failure modes are normalized to None inside
        // verify_token, so an unverifiable token reads as no session.
        let claims = session::verify_token(&token, &config.jwt_secret)
            .ok_or(StatusCode::UNAUTHORIZED)?;

        // Sliding inactivity: an idle session dies on its next request.
        if !sessions.touch(claims.sub) {
            tracing::info!(user = %claims.sub, "session expired after inactivity");
            return Err(StatusCode::UNAUTHORIZED);
        }

        // 5. Database lookup. Prevents access if the user was deleted after
        // the token was issued, and yields the authoritative role.
        let user = repo
            .get_user(claims.sub)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let role = Role::from_label(&user.role).ok_or_else(|| {
            tracing::warn!(user = %user.id, role = %user.role, "stored role label not recognized");
            StatusCode::FORBIDDEN
        })?;

        Ok(AuthUser {
            id: user.id,
            username: user.username,
            role,
        })
    }
}

/// The per-handler authorization seam: every content handler names the
/// feature it serves, and the check goes through the same role→feature table
/// the Gatekeeper and the sidebar menu are derived from.
pub fn require_feature(user: &AuthUser, feature: Feature) -> Result<(), StatusCode> {
    if user.role.allows(feature) {
        Ok(())
    } else {
        tracing::warn!(
            user = %user.id,
            role = user.role.label(),
            feature = ?feature,
            "feature denied for role"
        );
        Err(StatusCode::FORBIDDEN)
    }
}
