//! Exhibition HTTP handlers.
//!
//! This module implements the exhibition API endpoints:
//! - GET /exhibitions - List all exhibitions
//! - POST /exhibitions - Create new exhibition
//! - PUT /exhibitions/{id} - Replace an exhibition
//! - DELETE /exhibitions/{id} - Delete an exhibition

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    db::DbPool,
    error::AppError,
    models::exhibition::{ExhibitionPayload, ExhibitionResponse},
    openapi::MessageBody,
    services::exhibition_service,
    validation::{RecordId, ValidatedJson},
};

/// List all exhibitions.
///
/// # Response (200 OK)
///
/// ```json
/// [
///   { "id": 1, "name": "Art Fair", "date": "2024-05-01", "location": "Hall A", "participants": 120 }
/// ]
/// ```
#[utoipa::path(
    get, path = "/exhibitions", tag = "exhibitions",
    responses((status = 200, description = "List all exhibitions", body = [ExhibitionResponse]))
)]
pub async fn list_exhibitions(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<ExhibitionResponse>>, AppError> {
    let exhibitions = exhibition_service::list_exhibitions(&pool).await?;

    Ok(Json(exhibitions.into_iter().map(Into::into).collect()))
}

/// Create a new exhibition.
///
/// # Request Body
///
/// ```json
/// { "name": "Art Fair", "date": "2024-05-01", "location": "Hall A", "participants": 120 }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the stored exhibition, including its new `id`
/// - **Error (400)**: malformed JSON or a missing/mistyped field
#[utoipa::path(
    post, path = "/exhibitions", tag = "exhibitions",
    request_body = ExhibitionPayload,
    responses(
        (status = 201, description = "Exhibition created", body = ExhibitionResponse),
        (status = 400, description = "Input payload validation failed")
    )
)]
pub async fn create_exhibition(
    State(pool): State<DbPool>,
    ValidatedJson(payload): ValidatedJson<ExhibitionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let exhibition = exhibition_service::create_exhibition(&pool, payload).await?;

    Ok((StatusCode::CREATED, Json(ExhibitionResponse::from(exhibition))))
}

/// Replace every field of an exhibition.
///
/// # Response
///
/// - **Success (200 OK)**: the updated exhibition
/// - **Error (400)**: malformed JSON or a missing/mistyped field
/// - **Error (404)**: `{"message": "Exhibition not found"}`
#[utoipa::path(
    put, path = "/exhibitions/{id}", tag = "exhibitions",
    params(("id" = i64, Path, description = "The exhibition identifier")),
    request_body = ExhibitionPayload,
    responses(
        (status = 200, description = "Exhibition updated", body = ExhibitionResponse),
        (status = 400, description = "Input payload validation failed"),
        (status = 404, description = "Exhibition not found", body = MessageBody)
    )
)]
pub async fn update_exhibition(
    State(pool): State<DbPool>,
    RecordId(id): RecordId,
    ValidatedJson(payload): ValidatedJson<ExhibitionPayload>,
) -> Result<Json<ExhibitionResponse>, AppError> {
    let exhibition = exhibition_service::update_exhibition(&pool, id, payload).await?;

    Ok(Json(exhibition.into()))
}

/// Delete an exhibition.
///
/// Returns 204 No Content on success, 404 with
/// `{"message": "Exhibition not found"}` otherwise.
#[utoipa::path(
    delete, path = "/exhibitions/{id}", tag = "exhibitions",
    params(("id" = i64, Path, description = "The exhibition identifier")),
    responses(
        (status = 204, description = "Exhibition deleted"),
        (status = 404, description = "Exhibition not found", body = MessageBody)
    )
)]
pub async fn delete_exhibition(
    State(pool): State<DbPool>,
    RecordId(id): RecordId,
) -> Result<StatusCode, AppError> {
    exhibition_service::delete_exhibition(&pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
