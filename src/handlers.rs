use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    catalog::CatalogState,
    error::PortalError,
    models::{LoginRequest, NavigationResult, Role, RoleInfo, SectionInfo, SessionStatus},
    policy, resolver,
    session::SessionState,
};

// --- Registry & Catalog Handlers ---

/// list_roles
///
/// [Public Route] Enumerates the closed Role registry together with the
/// sections the access policy grants each role. This is the registry the
/// login selector is populated from; it never changes at runtime.
#[utoipa::path(
    get,
    path = "/roles",
    responses((status = 200, description = "Role registry", body = [RoleInfo]))
)]
pub async fn list_roles() -> Json<Vec<RoleInfo>> {
    let roles = Role::REGISTRY
        .iter()
        .map(|&role| RoleInfo {
            token: role.as_token().to_string(),
            accessible_sections: policy::accessible(role).into_iter().collect(),
        })
        .collect();
    Json(roles)
}

/// list_sections
///
/// [Public Route] Lists the static section catalog in declaration order,
/// with each section's page handles. Purely informational: which of these
/// sections a given session can actually navigate to is decided per role by
/// the navigation endpoint.
#[utoipa::path(
    get,
    path = "/sections",
    responses((status = 200, description = "Section catalog", body = [SectionInfo]))
)]
pub async fn list_sections(State(catalog): State<CatalogState>) -> Json<Vec<SectionInfo>> {
    let sections = catalog
        .sections()
        .iter()
        .map(|section| SectionInfo {
            name: section.name,
            label: section.name.label().to_string(),
            pages: section.pages.iter().map(|p| p.handle.clone()).collect(),
        })
        .collect();
    Json(sections)
}

// --- Session Lifecycle Handlers ---

/// create_session
///
/// [Public Route] Opens a fresh session in the `Unauthenticated` state and
/// returns its UUID. The UUID is the only credential a client holds: role
/// claims are accepted on it without identity validation, which is the
/// caller's concern by design.
#[utoipa::path(
    post,
    path = "/sessions",
    responses((status = 201, description = "Session created", body = SessionStatus))
)]
pub async fn create_session(
    State(sessions): State<SessionState>,
) -> (StatusCode, Json<SessionStatus>) {
    let (session_id, created_at) = sessions.create();
    (
        StatusCode::CREATED,
        Json(SessionStatus {
            session_id,
            role: Role::Unauthenticated,
            created_at,
        }),
    )
}

/// get_session
///
/// [Session Route] Pure read of the addressed session's current role.
#[utoipa::path(
    get,
    path = "/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session status", body = SessionStatus),
        (status = 404, description = "No such session")
    )
)]
pub async fn get_session(
    State(sessions): State<SessionState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionStatus>, PortalError> {
    let (role, created_at) = sessions.status(id)?;
    Ok(Json(SessionStatus {
        session_id: id,
        role,
        created_at,
    }))
}

/// login
///
/// [Session Route] Sets the session's role from the supplied wire token.
/// Any registry member is accepted, including `Unauthenticated`; re-login
/// without an intermediate logout overwrites the role. Tokens outside the
/// registry are rejected with 422 (`InvalidRole`) before touching state.
#[utoipa::path(
    post,
    path = "/sessions/{id}/login",
    params(("id" = Uuid, Path, description = "Session ID")),
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Role set", body = SessionStatus),
        (status = 404, description = "No such session"),
        (status = 422, description = "Token outside the role registry")
    )
)]
pub async fn login(
    State(sessions): State<SessionState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<SessionStatus>, PortalError> {
    let role = Role::parse(&payload.role)?;
    sessions.login(id, role)?;
    let (role, created_at) = sessions.status(id)?;
    Ok(Json(SessionStatus {
        session_id: id,
        role,
        created_at,
    }))
}

/// logout
///
/// [Session Route] Resets the session to `Unauthenticated`. Idempotent:
/// logging out an already-unauthenticated session succeeds with identical
/// observable state.
#[utoipa::path(
    post,
    path = "/sessions/{id}/logout",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Logged out", body = SessionStatus),
        (status = 404, description = "No such session")
    )
)]
pub async fn logout(
    State(sessions): State<SessionState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionStatus>, PortalError> {
    sessions.logout(id)?;
    let (role, created_at) = sessions.status(id)?;
    Ok(Json(SessionStatus {
        session_id: id,
        role,
        created_at,
    }))
}

/// end_session
///
/// [Session Route] Destroys the session outright. Nothing is persisted; the
/// UUID becomes invalid immediately.
#[utoipa::path(
    delete,
    path = "/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 204, description = "Session ended"),
        (status = 404, description = "No such session")
    )
)]
pub async fn end_session(
    State(sessions): State<SessionState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    sessions.end(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Navigation Handler ---

/// resolve_navigation
///
/// [Session Route] Reads the session's current role and resolves the
/// navigation structure for it: the Account group plus every accessible
/// section in catalog order, or the login-only structure when the role can
/// reach nothing. Recomputed on every call: the result is derived output,
/// never stored.
#[utoipa::path(
    get,
    path = "/sessions/{id}/navigation",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Resolved navigation", body = NavigationResult),
        (status = 404, description = "No such session")
    )
)]
pub async fn resolve_navigation(
    State(sessions): State<SessionState>,
    State(catalog): State<CatalogState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NavigationResult>, PortalError> {
    let role = sessions.current_role(id)?;
    Ok(Json(resolver::resolve(role, &catalog)))
}
