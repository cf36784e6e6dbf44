use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Authenticated API Router Module
///
/// Every route here is nested under `/api` and sits behind the auth
/// middleware layer applied in `create_router`, so each handler receives a
/// resolved `AuthUser`. Authorization is finer-grained than authentication:
/// each content handler additionally checks its feature grant against the
/// role policy table, so a valid session with the wrong role gets a 403, not
/// a handler.
pub fn api_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // --- Session ---
        // GET /api/auth/me
        // The authenticated user's profile.
        .route("/auth/me", get(handlers::get_me))
        // GET /api/auth/views
        // The sidebar menu derived from the role.
        .route("/auth/views", get(handlers::get_views))
        // --- Home dashboard ---
        .route("/stats", get(handlers::get_stats))
        // --- Media pipeline ---
        // POST /api/upload/presigned
        // Short-lived direct-upload URL; the returned key is then stored on
        // the owning record via the CRUD API.
        .route("/upload/presigned", post(handlers::get_presigned_url))
        // --- Content resources, one CRUD family per dashboard screen ---
        .route("/posts", get(handlers::list_posts).post(handlers::create_post))
        .route(
            "/posts/{id}",
            get(handlers::get_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )
        .route("/games", get(handlers::list_games).post(handlers::create_game))
        .route(
            "/games/{id}",
            get(handlers::get_game)
                .put(handlers::update_game)
                .delete(handlers::delete_game),
        )
        .route(
            "/members",
            get(handlers::list_members).post(handlers::create_member),
        )
        .route(
            "/members/{id}",
            get(handlers::get_member)
                .put(handlers::update_member)
                .delete(handlers::delete_member),
        )
        .route(
            "/authorities",
            get(handlers::list_authorities).post(handlers::create_authority),
        )
        .route(
            "/authorities/{id}",
            get(handlers::get_authority)
                .put(handlers::update_authority)
                .delete(handlers::delete_authority),
        )
        .route(
            "/events",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route(
            "/events/{id}",
            get(handlers::get_event)
                .put(handlers::update_event)
                .delete(handlers::delete_event),
        )
        // The print queue keeps its Spanish resource name; the frontend's
        // HTTP client addresses it as /api/impresiones.
        .route(
            "/impresiones",
            get(handlers::list_impressions).post(handlers::create_impression),
        )
        .route(
            "/impresiones/{id}",
            get(handlers::get_impression)
                .put(handlers::update_impression)
                .delete(handlers::delete_impression),
        )
        // GET /api/questions?game=...
        // Usually scoped to one game.
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route(
            "/questions/{id}",
            get(handlers::get_question)
                .put(handlers::update_question)
                .delete(handlers::delete_question),
        )
}
