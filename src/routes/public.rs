use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Endpoints reachable without a session.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Unauthenticated endpoint for monitoring and load balancer checks.
        .route("/health", get(|| async { "ok" }))
}

/// The session boundary, nested under `/api` but outside the auth layer.
/// Login must obviously work unauthenticated, and logout is deliberately
/// unauthenticated too: it only clears cookies and drops the caller's
/// activity record, and it must keep working for a client whose token
/// already expired, or that client can never reach a clean state.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        // POST /api/auth/login
        // Verifies credentials, issues the signed session token and sets the
        // three session cookies (token, user, role).
        .route("/auth/login", post(handlers::login))
        // POST /api/auth/logout
        // Best-effort session destruction (cookie clearing).
        .route("/auth/logout", post(handlers::logout))
}
