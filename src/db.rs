//! Database connection pool and migration management.
//!
//! Each service keeps its table in its own file-backed SQLite database. The
//! file is created on first start and the schema is applied by embedded
//! migrations.

use std::str::FromStr;

use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::app::Service;

/// Type alias for the SQLite connection pool shared by all handlers.
pub type DbPool = Pool<Sqlite>;

/// Create a new SQLite connection pool.
///
/// The database file is created if it does not exist yet.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (e.g. `sqlite://exhibitions.db`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or the database cannot be
/// opened.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Apply the migrations belonging to `service`.
///
/// Migrations live in `migrations/<table>/` and are embedded at compile time.
/// Applied versions are tracked in `_sqlx_migrations`, so restarting a
/// service against an existing file is a no-op. Versions are unique across
/// both directories and each migrator ignores the other's rows, so the two
/// services can also share one database file.
pub async fn run_migrations(
    pool: &DbPool,
    service: Service,
) -> Result<(), sqlx::migrate::MigrateError> {
    let mut migrator = match service {
        Service::Exhibitions => sqlx::migrate!("./migrations/exhibitions"),
        Service::Components => sqlx::migrate!("./migrations/components"),
    };
    migrator.set_ignore_missing(true);

    migrator.run(pool).await
}
