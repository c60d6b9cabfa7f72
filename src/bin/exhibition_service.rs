//! Exhibition Service entry point.
//!
//! Serves `/exhibitions` backed by its own SQLite database.

use showcase_services::app::{self, Service};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::init_tracing();
    app::run(Service::Exhibitions).await
}
