//! Component HTTP handlers.
//!
//! - GET /components
//! - POST /components
//! - PUT /components/{id}
//! - DELETE /components/{id}

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    db::DbPool,
    error::AppError,
    models::component::{ComponentPayload, ComponentResponse},
    openapi::MessageBody,
    services::component_service,
    validation::{RecordId, ValidatedJson},
};

/// List all components.
#[utoipa::path(
    get, path = "/components", tag = "components",
    responses((status = 200, description = "List all components", body = [ComponentResponse]))
)]
pub async fn list_components(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<ComponentResponse>>, AppError> {
    let components = component_service::list_components(&pool).await?;

    Ok(Json(components.into_iter().map(Into::into).collect()))
}

/// Create a new component. Responds 201 with the stored record.
#[utoipa::path(
    post, path = "/components", tag = "components",
    request_body = ComponentPayload,
    responses(
        (status = 201, description = "Component created", body = ComponentResponse),
        (status = 400, description = "Input payload validation failed")
    )
)]
pub async fn create_component(
    State(pool): State<DbPool>,
    ValidatedJson(payload): ValidatedJson<ComponentPayload>,
) -> Result<impl IntoResponse, AppError> {
    let component = component_service::create_component(&pool, payload).await?;

    Ok((StatusCode::CREATED, Json(ComponentResponse::from(component))))
}

/// Replace every field of a component, or 404 if it does not exist.
#[utoipa::path(
    put, path = "/components/{id}", tag = "components",
    params(("id" = i64, Path, description = "The component identifier")),
    request_body = ComponentPayload,
    responses(
        (status = 200, description = "Component updated", body = ComponentResponse),
        (status = 400, description = "Input payload validation failed"),
        (status = 404, description = "Component not found", body = MessageBody)
    )
)]
pub async fn update_component(
    State(pool): State<DbPool>,
    RecordId(id): RecordId,
    ValidatedJson(payload): ValidatedJson<ComponentPayload>,
) -> Result<Json<ComponentResponse>, AppError> {
    let component = component_service::update_component(&pool, id, payload).await?;

    Ok(Json(component.into()))
}

/// Delete a component. 204 on success, 404 if it does not exist.
#[utoipa::path(
    delete, path = "/components/{id}", tag = "components",
    params(("id" = i64, Path, description = "The component identifier")),
    responses(
        (status = 204, description = "Component deleted"),
        (status = 404, description = "Component not found", body = MessageBody)
    )
)]
pub async fn delete_component(
    State(pool): State<DbPool>,
    RecordId(id): RecordId,
) -> Result<StatusCode, AppError> {
    component_service::delete_component(&pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
