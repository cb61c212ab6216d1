use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Session Router Module
///
/// Every route here addresses one live session by the UUID in its path.
/// An unknown UUID fails uniformly with 404: the store is the single
/// authority on which sessions exist.
///
/// Note that none of these routes are themselves role-gated: login accepts a
/// role claim without identity validation (the portal's callers own any real
/// authentication), and the navigation endpoint applies the access policy to
/// whatever role the session currently holds.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        // GET /sessions/{id}
        // Current role and creation time of the session. Pure read.
        // DELETE /sessions/{id}
        // Ends the session; its state is discarded, never persisted.
        .route(
            "/sessions/{id}",
            get(handlers::get_session).delete(handlers::end_session),
        )
        // POST /sessions/{id}/login
        // Sets the session's role from a wire token. Re-login without an
        // intermediate logout overwrites the role.
        .route("/sessions/{id}/login", post(handlers::login))
        // POST /sessions/{id}/logout
        // Resets the session to Unauthenticated. Idempotent.
        .route("/sessions/{id}/logout", post(handlers::logout))
        // GET /sessions/{id}/navigation
        // Resolves the navigation structure for the session's current role:
        // Account group plus accessible sections, or login-only when the
        // role can reach nothing.
        .route(
            "/sessions/{id}/navigation",
            get(handlers::resolve_navigation),
        )
}
