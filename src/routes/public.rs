use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Endpoints that require no session and carry no mutable state of their
/// own. The registry and catalog listings serve static startup data; the
/// only write here is session creation, which mints the UUID every
/// session-scoped route is addressed by.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // A simple, unauthenticated endpoint used for monitoring and load
        // balancer checks. Returns "ok" immediately.
        .route("/health", get(|| async { "ok" }))
        // GET /roles
        // The closed role registry with each role's accessible sections.
        // Front-ends populate their login selector from this.
        .route("/roles", get(handlers::list_roles))
        // GET /sections
        // The static section catalog in declaration order. Informational
        // only; per-role visibility comes from /sessions/{id}/navigation.
        .route("/sections", get(handlers::list_sections))
        // POST /sessions
        // Opens a fresh unauthenticated session and returns its UUID.
        .route("/sessions", post(handlers::create_session))
}
