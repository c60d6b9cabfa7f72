//! Component Service entry point.

use showcase_services::app::{self, Service};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::init_tracing();
    app::run(Service::Components).await
}
