use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod gatekeeper;
pub mod handlers;
pub mod models;
pub mod policy;
pub mod repository;
pub mod session;
pub mod storage;

// Routing segregation (pages, public, authenticated API).
pub mod routes;
use routes::{api, pages, public};

use auth::AuthUser; // The resolved authenticated user identity.

// --- Public Re-exports ---

// Makes core state types easily accessible to the entry point (main.rs).
pub use config::AppConfig;
pub use repository::{PostgresRepository, RepositoryState};
pub use session::{ActivityTracker, SessionState};
pub use storage::{MockStorageService, S3StorageClient, StorageState};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the API
/// surface: every handler decorated with `#[utoipa::path]` and every schema
/// in a request/response body. Served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::login, handlers::logout, handlers::get_me, handlers::get_views,
        handlers::get_stats, handlers::get_presigned_url,
        handlers::list_posts, handlers::get_post, handlers::create_post,
        handlers::update_post, handlers::delete_post,
        handlers::list_games, handlers::get_game, handlers::create_game,
        handlers::update_game, handlers::delete_game,
        handlers::list_members, handlers::get_member, handlers::create_member,
        handlers::update_member, handlers::delete_member,
        handlers::list_authorities, handlers::get_authority, handlers::create_authority,
        handlers::update_authority, handlers::delete_authority,
        handlers::list_events, handlers::get_event, handlers::create_event,
        handlers::update_event, handlers::delete_event,
        handlers::list_impressions, handlers::get_impression, handlers::create_impression,
        handlers::update_impression, handlers::delete_impression,
        handlers::list_questions, handlers::get_question, handlers::create_question,
        handlers::update_question, handlers::delete_question
    ),
    components(
        schemas(
            models::LoginRequest, models::SessionResponse, models::UserProfile,
            models::DashboardStats, models::PresignedUrlRequest, models::PresignedUrlResponse,
            models::Post, models::CreatePostRequest, models::UpdatePostRequest,
            models::Game, models::CreateGameRequest, models::UpdateGameRequest,
            models::Member, models::CreateMemberRequest, models::UpdateMemberRequest,
            models::Authority, models::CreateAuthorityRequest, models::UpdateAuthorityRequest,
            models::Event, models::CreateEventRequest, models::UpdateEventRequest,
            models::Impression, models::CreateImpressionRequest, models::UpdateImpressionRequest,
            models::Question, models::CreateQuestionRequest, models::UpdateQuestionRequest,
            policy::NavView,
        )
    ),
    tags(
        (name = "gamecenter-portal", description = "GameCenter admin dashboard API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe, immutable container holding all application
/// services and configuration, shared across all incoming requests.
#[derive(Clone)]
pub struct AppState {
    /// Repository layer: abstracts database access via the PgPool connection.
    pub repo: RepositoryState,
    /// Storage layer: abstracts S3/MinIO access and presigned URL generation.
    pub storage: StorageState,
    /// Session activity: the sliding-inactivity tracker.
    pub sessions: SessionState,
    /// Configuration: the loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// Allow extractors and handlers to selectively pull components from the
// shared AppState.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for StorageState {
    fn from_ref(app_state: &AppState) -> StorageState {
        app_state.storage.clone()
    }
}

impl FromRef<AppState> for SessionState {
    fn from_ref(app_state: &AppState) -> SessionState {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// auth_middleware
///
/// Enforces authentication for the `/api` router.
///
/// *Mechanism*: it attempts to extract `AuthUser` from the request. Since
/// `AuthUser` implements `FromRequestParts`, a failed extraction (bad token,
/// idle session, deleted user) rejects the request with 401/403 before the
/// handler runs. Handlers that need the identity simply extract `AuthUser`
/// again; resolution is cheap and per-request.
async fn auth_middleware(_auth_user: AuthUser, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global and
/// scoped middleware, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS configuration.
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base router assembly.
    let base_router = Router::new()
        // Documentation: serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public routes: no middleware applied.
        .merge(public::public_routes())
        // Ungated pages: /not-found must stay outside the matcher, since the
        // Gatekeeper redirects broken sessions to it.
        .merge(pages::ungated_routes())
        // The navigable pages: exactly the matcher set, wrapped in the
        // Gatekeeper. Every outcome of the edge policy (allow or one of the
        // three redirects) is decided in this layer.
        .merge(pages::gated_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            gatekeeper::gatekeeper,
        )))
        // The REST API: nested under /api. The auth layer is applied to the
        // protected routes before the session routes (login/logout) are
        // merged in, so only the former sit behind it. Per-feature
        // authorization happens inside the handlers via the policy table.
        .nest(
            "/api",
            api::api_routes()
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                ))
                .merge(public::session_routes()),
        )
        // Apply the unified state to all routes.
        .with_state(state);

    // 3. Observability and correlation layers (applied outermost/first).
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID generation: a unique UUID per incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request tracing: wraps the request/response lifecycle in
                // a span carrying the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID propagation back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS layer.
        .layer(cors)
}

/// trace_span_logger
///
/// Customizes `TraceLayer` span creation: extracts the `x-request-id` header
/// (if present) and includes it in the structured logging metadata alongside
/// the HTTP method and URI, so every log line for a request is correlated.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
