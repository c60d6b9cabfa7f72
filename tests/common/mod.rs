use showcase_services::{
    app::{self, Service},
    db::{self, DbPool},
};
use sqlx::sqlite::SqlitePoolOptions;

pub struct TestServer {
    pub base_url: String,
    #[allow(dead_code)]
    pub pool: DbPool,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Serve `service` over a fresh in-memory database on an ephemeral port.
    pub async fn spawn(service: Service) -> Self {
        // A single long-lived connection keeps the in-memory database alive.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        db::run_migrations(&pool, service)
            .await
            .expect("failed to run migrations");

        let app = app::router(service, pool.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            pool,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
