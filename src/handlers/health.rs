//! Health check endpoint for service monitoring.

use axum::{Extension, Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{app::Service, db::DbPool, error::AppError};

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Which service answered (`exhibitions` or `components`)
    pub service: String,

    /// Database connection status
    pub database: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "exhibitions",
///   "database": "connected",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
///
/// If the database is unreachable the standard 500 error body is returned.
#[utoipa::path(
    get, path = "/health", tag = "health",
    responses(
        (status = 200, description = "Service and database are up", body = HealthResponse),
        (status = 500, description = "Database unreachable", body = crate::openapi::MessageBody)
    )
)]
pub async fn health_check(
    State(pool): State<DbPool>,
    Extension(service): Extension<Service>,
) -> Result<Json<HealthResponse>, AppError> {
    // Verify database connectivity with simple query
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        service: service.table().to_string(),
        database: "connected".to_string(),
        timestamp: Utc::now(),
    }))
}
