use std::time::{SystemTime, UNIX_EPOCH};

use showcase_services::{app::Service, db};

fn temp_db_path(stem: &str) -> std::path::PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("{stem}-{}-{nanos}.db", std::process::id()))
}

#[tokio::test]
async fn database_file_is_created_and_migrated() {
    let path = temp_db_path("exhibitions");
    assert!(!path.exists());

    let url = format!("sqlite://{}", path.display());
    let pool = db::create_pool(&url, 2).await.unwrap();
    db::run_migrations(&pool, Service::Exhibitions).await.unwrap();

    assert!(path.exists());
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exhibitions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    pool.close().await;
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn migrations_are_idempotent_across_restarts() {
    let path = temp_db_path("components");
    let url = format!("sqlite://{}", path.display());

    let pool = db::create_pool(&url, 1).await.unwrap();
    db::run_migrations(&pool, Service::Components).await.unwrap();
    sqlx::query("INSERT INTO components (name, category, price) VALUES ('fuse', 'protection', 0.3)")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let pool = db::create_pool(&url, 1).await.unwrap();
    db::run_migrations(&pool, Service::Components).await.unwrap();
    let names: Vec<String> = sqlx::query_scalar("SELECT name FROM components")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(names, vec!["fuse".to_string()]);

    pool.close().await;
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn both_services_can_share_one_database_file() {
    let path = temp_db_path("shared");
    let url = format!("sqlite://{}", path.display());

    let pool = db::create_pool(&url, 1).await.unwrap();
    db::run_migrations(&pool, Service::Exhibitions).await.unwrap();
    db::run_migrations(&pool, Service::Components).await.unwrap();

    for table in ["exhibitions", "components"] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    pool.close().await;
    let _ = std::fs::remove_file(&path);
}
