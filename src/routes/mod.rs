/// Router Module Index
///
/// Organizes the routing surface by access level, so access control is
/// applied explicitly at the module seam (via axum layers in
/// `create_router`) rather than scattered per route.

/// The navigable pages: the Gatekeeper's matcher set plus `/not-found`.
pub mod pages;

/// Routes reachable without a session: health probe, login, logout.
pub mod public;

/// The authenticated REST API, nested under `/api` behind the auth layer.
pub mod api;
