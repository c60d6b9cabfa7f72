//! Component service - persistence for the `components` table.
//!
//! Same transaction discipline as the exhibition service: commit on success,
//! rollback on not-found or on any error.

use crate::{
    db::DbPool,
    error::AppError,
    models::component::{Component, ComponentPayload},
};

const ENTITY: &str = "Component";

/// Fetch every component in storage order.
pub async fn list_components(pool: &DbPool) -> Result<Vec<Component>, AppError> {
    let components = sqlx::query_as::<_, Component>(
        "SELECT id, name, category, price FROM components ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!(count = components.len(), "listed components");

    Ok(components)
}

/// Insert a new component and return it with its assigned id.
pub async fn create_component(
    pool: &DbPool,
    payload: ComponentPayload,
) -> Result<Component, AppError> {
    let mut tx = pool.begin().await?;

    let component = sqlx::query_as::<_, Component>(
        r#"
        INSERT INTO components (name, category, price)
        VALUES (?, ?, ?)
        RETURNING id, name, category, price
        "#,
    )
    .bind(payload.name)
    .bind(payload.category)
    .bind(payload.price)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(id = component.id, "component created");

    Ok(component)
}

/// Overwrite every mutable field of component `id`.
pub async fn update_component(
    pool: &DbPool,
    id: i64,
    payload: ComponentPayload,
) -> Result<Component, AppError> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query_as::<_, Component>(
        r#"
        UPDATE components
        SET name = ?,
            category = ?,
            price = ?
        WHERE id = ?
        RETURNING id, name, category, price
        "#,
    )
    .bind(payload.name)
    .bind(payload.category)
    .bind(payload.price)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(component) = updated else {
        tx.rollback().await?;
        return Err(AppError::NotFound(ENTITY));
    };

    tx.commit().await?;

    tracing::info!(id, "component updated");

    Ok(component)
}

/// Remove component `id`.
pub async fn delete_component(pool: &DbPool, id: i64) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM components WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if deleted == 0 {
        tx.rollback().await?;
        return Err(AppError::NotFound(ENTITY));
    }

    tx.commit().await?;

    tracing::info!(id, "component deleted");

    Ok(())
}
