use crate::AppState;
use axum::{Router, response::Html, routing::get};

/// Page Router Module
///
/// Serves the navigable surface of the dashboard: the application shell for
/// every gated path, the login page, and the not-found page. The dashboard
/// itself is a single-page app; the server's job on these routes is to put
/// the Gatekeeper in front of every deep link before the shell is handed out.

// The shell bootstraps the SPA bundle; every gated page serves the same one.
const APP_SHELL: &str = r#"<!doctype html>
<html lang="es">
  <head><meta charset="utf-8"><title>GameCenter Admin</title></head>
  <body><div id="root"></div><script type="module" src="/assets/app.js"></script></body>
</html>
"#;

const NOT_FOUND_PAGE: &str = r#"<!doctype html>
<html lang="es">
  <head><meta charset="utf-8"><title>GameCenter Admin</title></head>
  <body><main><h1>404</h1><p>Página no encontrada.</p><a href="/">Volver al inicio</a></main></body>
</html>
"#;

async fn shell() -> Html<&'static str> {
    Html(APP_SHELL)
}

async fn not_found_page() -> Html<&'static str> {
    Html(NOT_FOUND_PAGE)
}

/// The matcher routes. `create_router` wraps exactly this router with the
/// Gatekeeper layer, so this list and `gatekeeper::MATCHED_PATHS` describe
/// the same set.
pub fn gated_routes() -> Router<AppState> {
    Router::new()
        // "/": home dashboard (stats + sidebar). Reachable by every role.
        .route("/", get(shell))
        // "/login": the only matcher path served while unauthenticated.
        .route("/login", get(shell))
        // One screen per gated feature.
        .route("/posts", get(shell))
        .route("/juegos", get(shell))
        .route("/miembros", get(shell))
        .route("/autoridades", get(shell))
        .route("/eventos", get(shell))
        .route("/impresiones", get(shell))
}

/// Pages outside the matcher. The Gatekeeper never sees these; `/not-found`
/// in particular must stay reachable, since the Gatekeeper redirects broken
/// sessions to it.
pub fn ungated_routes() -> Router<AppState> {
    Router::new().route("/not-found", get(not_found_page))
}
