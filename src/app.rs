//! Router construction and service start-up.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the SQLite connection pool (database file created if missing)
//! 3. Run the service's migrations
//! 4. Build the HTTP router with routes and middleware
//! 5. Start serving on the configured address

use axum::{
    Extension, Router,
    routing::{get, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, db, db::DbPool, handlers, openapi};

/// The two independent services shipped by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Exhibitions,
    Components,
}

impl Service {
    /// Table name, also used as the URL segment and default database file stem.
    pub fn table(self) -> &'static str {
        match self {
            Service::Exhibitions => "exhibitions",
            Service::Components => "components",
        }
    }

    /// Prefix for this service's environment variables.
    pub fn env_prefix(self) -> &'static str {
        match self {
            Service::Exhibitions => "EXHIBITIONS_",
            Service::Components => "COMPONENTS_",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Service::Exhibitions => 5000,
            Service::Components => 5001,
        }
    }
}

/// Build the full router for `service` on top of an already migrated pool.
pub fn router(service: Service, pool: DbPool) -> Router {
    let resource_routes = match service {
        Service::Exhibitions => Router::new()
            .route(
                "/exhibitions",
                get(handlers::exhibitions::list_exhibitions)
                    .post(handlers::exhibitions::create_exhibition),
            )
            .route(
                "/exhibitions/{id}",
                put(handlers::exhibitions::update_exhibition)
                    .delete(handlers::exhibitions::delete_exhibition),
            ),
        Service::Components => Router::new()
            .route(
                "/components",
                get(handlers::components::list_components)
                    .post(handlers::components::create_component),
            )
            .route(
                "/components/{id}",
                put(handlers::components::update_component)
                    .delete(handlers::components::delete_component),
            ),
    };

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(resource_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/swagger.json", openapi::api_doc(service)))
        .layer(
            ServiceBuilder::new()
                // Request/response spans for every call
                .layer(TraceLayer::new_for_http())
                // Lets handlers know which service they are running in
                .layer(Extension(service)),
        )
        // Share database pool with all handlers via State extraction
        .with_state(pool)
}

/// Initialize logging with tracing subscriber. Reads the RUST_LOG environment
/// variable (defaults to "info" level).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

/// Start `service` and serve until the process is stopped.
pub async fn run(service: Service) -> anyhow::Result<()> {
    let config = Config::from_env(service)?;
    tracing::info!(service = service.table(), "Configuration loaded");

    let pool = db::create_pool(&config.database_url, config.max_connections).await?;
    tracing::info!(database_url = %config.database_url, "Database pool created");

    db::run_migrations(&pool, service).await?;
    tracing::info!("Database migrations complete");

    let app = router(service, pool);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(service = service.table(), "Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
