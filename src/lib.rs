use axum::{Router, extract::FromRef, http::HeaderName};
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

// Core navigation logic: the closed registries, the access policy table,
// per-session state, and the resolver that composes them.
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod policy;
pub mod resolver;
pub mod session;

// Serving surface around the core.
pub mod handlers;
pub mod routes;
use routes::{public, session as session_routes};

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry
// point (main.rs) and to integration tests.
pub use catalog::{CatalogState, SectionCatalog};
pub use config::AppConfig;
pub use session::{SessionState, SessionStore};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the
/// application from the `#[utoipa::path]` handler annotations and the
/// `ToSchema` model derives. Served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_roles, handlers::list_sections, handlers::create_session,
        handlers::get_session, handlers::login, handlers::logout,
        handlers::end_session, handlers::resolve_navigation,
    ),
    components(
        schemas(
            models::Role, models::SectionName, models::PageHandle,
            models::NavigationGroup, models::NavigationResult,
            models::LoginRequest, models::SessionStatus,
            models::RoleInfo, models::SectionInfo,
        )
    ),
    tags(
        (name = "analytics-portal", description = "Role-gated navigation API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe container holding all shared application
/// services: the session store (the only mutable state in the process), the
/// immutable section catalog, and the loaded configuration. Cloned per
/// request; the interior `Arc`s share the actual data.
#[derive(Clone)]
pub struct AppState {
    /// The owner of every live session's role field.
    pub sessions: SessionState,
    /// The static section catalog, built once at startup.
    pub catalog: CatalogState,
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// Allow handlers to selectively pull the component they actually need from
// the shared AppState instead of taking the whole container.

impl FromRef<AppState> for SessionState {
    fn from_ref(app_state: &AppState) -> SessionState {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for CatalogState {
    fn from_ref(app_state: &AppState) -> CatalogState {
        app_state.catalog.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the application's entire routing structure, applies the
/// observability middleware stack, and registers the shared state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Sessionless routes: health, registry, catalog, session creation.
        .merge(public::public_routes())
        // Session-scoped routes, addressed by UUID.
        .merge(session_routes::session_routes())
        // Apply the unified state to all routes.
        .with_state(state);

    // 3. Observability and Correlation Layers (applied outermost/first)
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
        // 4. CORS layer
        .layer(cors)
}

/// trace_span_logger
///
/// Helper used by `TraceLayer` to customize span creation: includes the
/// `x-request-id` header (if present) alongside the HTTP method and URI, so
/// every log line for a single request is correlated by a unique ID.
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
