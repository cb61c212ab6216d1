use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

/// PortalError
///
/// The complete error taxonomy of the navigation core and its HTTP surface.
/// `InvalidRole` is the only failure the core itself defines: it is raised at
/// the parse boundary when a raw role token falls outside the closed Role
/// registry. `Session::login` takes an already-typed `Role`, so once a token
/// has parsed, login cannot fail.
///
/// `SessionNotFound` belongs to the session store: every session-scoped
/// endpoint addresses a session by UUID, and an unknown UUID means the caller
/// never created a session (or already ended it).
///
/// An empty accessible-section set is NOT an error anywhere: it is a defined
/// outcome that resolves to the login-only navigation structure.
#[derive(Debug, Error)]
pub enum PortalError {
    /// The supplied token does not name a member of the Role registry.
    /// Recoverable by the caller (re-prompt with a valid token).
    #[error("unknown role token: {0}")]
    InvalidRole(String),

    /// No live session exists under the given UUID.
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),
}

impl PortalError {
    /// Maps each error variant to its HTTP status code.
    ///
    /// - InvalidRole: 422 Unprocessable Entity (well-formed request, value
    ///   outside the registry)
    /// - SessionNotFound: 404 Not Found
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRole(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::SessionNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
