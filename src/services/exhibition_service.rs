//! Exhibition service - persistence for the `exhibitions` table.
//!
//! Every mutating operation runs inside its own database transaction. The
//! transaction is committed only on success; a not-found lookup rolls it
//! back explicitly and any `?` early return drops it, which rolls back too.

use crate::{
    db::DbPool,
    error::AppError,
    models::exhibition::{Exhibition, ExhibitionPayload},
};

const ENTITY: &str = "Exhibition";

/// Fetch every exhibition in storage order.
pub async fn list_exhibitions(pool: &DbPool) -> Result<Vec<Exhibition>, AppError> {
    let exhibitions = sqlx::query_as::<_, Exhibition>(
        "SELECT id, name, date, location, participants FROM exhibitions ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!(count = exhibitions.len(), "listed exhibitions");

    Ok(exhibitions)
}

/// Insert a new exhibition and return it with its assigned id.
pub async fn create_exhibition(
    pool: &DbPool,
    payload: ExhibitionPayload,
) -> Result<Exhibition, AppError> {
    let mut tx = pool.begin().await?;

    let exhibition = sqlx::query_as::<_, Exhibition>(
        r#"
        INSERT INTO exhibitions (name, date, location, participants)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, date, location, participants
        "#,
    )
    .bind(payload.name)
    .bind(payload.date)
    .bind(payload.location)
    .bind(payload.participants)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(id = exhibition.id, "exhibition created");

    Ok(exhibition)
}

/// Overwrite every mutable field of exhibition `id`.
///
/// # Errors
///
/// - `NotFound`: no exhibition with this id; nothing is written
/// - `Database`: query or commit failed
pub async fn update_exhibition(
    pool: &DbPool,
    id: i64,
    payload: ExhibitionPayload,
) -> Result<Exhibition, AppError> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query_as::<_, Exhibition>(
        r#"
        UPDATE exhibitions
        SET name = ?,
            date = ?,
            location = ?,
            participants = ?
        WHERE id = ?
        RETURNING id, name, date, location, participants
        "#,
    )
    .bind(payload.name)
    .bind(payload.date)
    .bind(payload.location)
    .bind(payload.participants)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(exhibition) = updated else {
        tx.rollback().await?;
        return Err(AppError::NotFound(ENTITY));
    };

    tx.commit().await?;

    tracing::info!(id, "exhibition updated");

    Ok(exhibition)
}

/// Remove exhibition `id`.
///
/// # Errors
///
/// - `NotFound`: no exhibition with this id
/// - `Database`: query or commit failed
pub async fn delete_exhibition(pool: &DbPool, id: i64) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM exhibitions WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if deleted == 0 {
        tx.rollback().await?;
        return Err(AppError::NotFound(ENTITY));
    }

    tx.commit().await?;

    tracing::info!(id, "exhibition deleted");

    Ok(())
}
