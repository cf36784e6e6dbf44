use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{AppState, session};

/// The login page. Unauthenticated traffic lands here; authenticated traffic
/// is bounced away from here.
pub const LOGIN_PATH: &str = "/login";
/// The dashboard home. Destination for authenticated-but-unauthorized
/// navigation (a real role asking for a page outside its allow-set).
pub const HOME_PATH: &str = "/";
/// Hard stop for sessions carrying an unrecognized role cookie.
pub const NOT_FOUND_PATH: &str = "/not-found";

/// The matcher: the only paths the Gatekeeper sees. The page router is built
/// from exactly this list; anything else (`/not-found`, `/api/*`, `/health`,
/// the Swagger UI) bypasses the Gatekeeper entirely.
pub const MATCHED_PATHS: &[&str] = &[
    "/",
    "/login",
    "/posts",
    "/juegos",
    "/miembros",
    "/autoridades",
    "/eventos",
    "/impresiones",
];

/// gatekeeper
///
/// Request-time authorization for every navigable request, layered over the
/// page router. Each request is evaluated independently from its cookies
/// alone; there is no server-side session record beyond the inactivity
/// tracker.
///
/// Outcomes:
/// - missing or unverifiable token, path ≠ login  → redirect to `/login`
/// - verified token, path = login                 → redirect to `/` (home)
/// - unrecognized role cookie                     → redirect to `/not-found`
/// - idle past the inactivity window              → cookies cleared, `/login`
/// - recognized role, path outside its allow-set  → redirect to `/` (home)
/// - otherwise                                    → allow
///
/// A token that fails verification is treated identically to no token at all:
/// the verifier result is already normalized to an Option upstream, and the
/// user-visible remedy (re-login) is the same either way. Denials are logged,
/// never rendered as error pages.
pub async fn gatekeeper(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let claims = session::cookie_value(request.headers(), session::TOKEN_COOKIE)
        .and_then(|token| session::verify_token(&token, &state.config.jwt_secret));

    let Some(claims) = claims else {
        if path == LOGIN_PATH {
            return next.run(request).await;
        }
        return Redirect::to(LOGIN_PATH).into_response();
    };

    // Already authenticated: the login page is not for you.
    if path == LOGIN_PATH {
        return Redirect::to(HOME_PATH).into_response();
    }

    let role = session::cookie_value(request.headers(), session::ROLE_COOKIE)
        .and_then(|raw| session::decode_role_cookie(&raw));

    let Some(role) = role else {
        // Hard stop: a verified token with a role outside the closed set is
        // not a navigation problem but a broken session.
        tracing::warn!(%path, "gated request with unrecognized role cookie");
        return Redirect::to(NOT_FOUND_PATH).into_response();
    };

    // Sliding inactivity: checked lazily on the way through, no ambient
    // timer. Expiry destroys the session outright.
    if !state.sessions.touch(claims.sub) {
        tracing::info!(user = %claims.sub, "idle session logged out");
        let mut response = Redirect::to(LOGIN_PATH).into_response();
        session::apply_cookies(response.headers_mut(), &session::clearing_cookies());
        return response;
    }

    if !role.permits_path(&path) {
        tracing::info!(role = role.label(), %path, "path outside role allow-set");
        return Redirect::to(HOME_PATH).into_response();
    }

    next.run(request).await
}
