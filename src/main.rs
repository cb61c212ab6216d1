use std::sync::Arc;

use analytics_portal::{
    AppState,
    catalog::{CatalogState, SectionCatalog},
    config::{AppConfig, Env},
    create_router,
    session::{SessionState, SessionStore},
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point for the application: loads configuration,
/// initializes logging, builds the static section catalog and the session
/// store, and starts the HTTP server.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading
    // Loads .env file settings before configuration can be read.
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Prioritizes RUST_LOG, falling back to sensible defaults for local
    // development.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "analytics_portal=debug,tower_http=info,axum=trace".into());

    // 3. Initialize Logging based on Environment
    match config.env {
        Env::Local => {
            // LOCAL: pretty output for human readability.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON output for ingestion by centralized log aggregators.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Static Catalog Initialization
    // The section catalog and the access policy it is resolved against are
    // fixed at startup and shared read-only across all sessions.
    let catalog = Arc::new(SectionCatalog::standard()) as CatalogState;

    // 5. Session Store Initialization
    // In-memory only: session state lives exactly as long as the process.
    let sessions = Arc::new(SessionStore::new()) as SessionState;

    // 6. Unified State Assembly
    let bind_addr = config.bind_addr.clone();
    let app_state = AppState {
        sessions,
        catalog,
        config,
    };

    // 7. Router and Server Startup
    let app = create_router(app_state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .expect("FATAL: failed to bind listen address. Check BIND_ADDR.");

    tracing::info!("HTTP server bound successfully.");
    tracing::info!("Listening on {bind_addr}");
    tracing::info!("API Documentation (Swagger UI) available at /swagger-ui");

    axum::serve(listener, app)
        .await
        .expect("FATAL: HTTP server terminated unexpectedly.");
}
