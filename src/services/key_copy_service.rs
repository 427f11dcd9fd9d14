//! Key copy service - CRUD for physical key duplicates.

use crate::{
    db::DbPool,
    error::AppError,
    models::key_copy::{KeyCopy, KeyCopyRequest, KeyCopyView},
    pagination::{Page, PageRequest},
    query::{self, ListQuery},
};

use super::references::{ensure_key_exists, ensure_staff_exists, lock_existing};

/// Key copy listing: joined with the key name (always present) and the
/// holder's name (absent for unassigned copies), filtered on the key name.
pub const KEY_COPY_LISTING: ListQuery = ListQuery {
    from: "key_copies kc \
           JOIN keys k ON k.id = kc.key_id \
           LEFT JOIN staffs s ON s.id = kc.staff_id",
    columns: "kc.id, kc.key_id, k.name AS key_name, kc.staff_id, s.name AS staff_name",
    filter_column: "k.name",
    id_column: "kc.id",
};

const LOCK_KEY_COPY: &str = "SELECT id FROM key_copies WHERE id = $1 FOR UPDATE";

pub async fn list_key_copies(
    pool: &DbPool,
    request: &PageRequest,
) -> Result<Page<KeyCopyView>, AppError> {
    Ok(query::fetch_page(pool, &KEY_COPY_LISTING, request).await?)
}

pub async fn get_key_copy(pool: &DbPool, key_copy_id: i32) -> Result<KeyCopyView, AppError> {
    query::fetch_by_id(pool, &KEY_COPY_LISTING, key_copy_id)
        .await?
        .ok_or(AppError::NotFound("Key copy"))
}

/// Create a copy of an existing key, optionally held by a staff member.
///
/// # Errors
///
/// - `InvalidRequest`: `key_id` missing or zero
/// - `InvalidReference`: `key_id` or `staff_id` does not resolve
pub async fn create_key_copy(pool: &DbPool, request: KeyCopyRequest) -> Result<KeyCopy, AppError> {
    let key_id = request.validate()?;

    let mut tx = pool.begin().await?;
    ensure_staff_exists(&mut *tx, request.staff_id).await?;
    ensure_key_exists(&mut *tx, key_id).await?;

    let copy = sqlx::query_as::<_, KeyCopy>(
        "INSERT INTO key_copies (key_id, staff_id) VALUES ($1, $2) RETURNING id, key_id, staff_id",
    )
    .bind(key_id)
    .bind(request.staff_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(key_copy_id = copy.id, key_id, staff_id = ?copy.staff_id, "key copy created");
    Ok(copy)
}

/// Re-point an existing key copy at a key and holder.
pub async fn update_key_copy(
    pool: &DbPool,
    key_copy_id: i32,
    request: KeyCopyRequest,
) -> Result<KeyCopy, AppError> {
    let key_id = request.validate()?;

    let mut tx = pool.begin().await?;
    lock_existing(&mut *tx, LOCK_KEY_COPY, key_copy_id, "Key copy").await?;
    ensure_staff_exists(&mut *tx, request.staff_id).await?;
    ensure_key_exists(&mut *tx, key_id).await?;

    let copy = sqlx::query_as::<_, KeyCopy>(
        r#"
        UPDATE key_copies
        SET key_id = $1, staff_id = $2
        WHERE id = $3
        RETURNING id, key_id, staff_id
        "#,
    )
    .bind(key_id)
    .bind(request.staff_id)
    .bind(key_copy_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(key_copy_id, key_id, staff_id = ?copy.staff_id, "key copy updated");
    Ok(copy)
}

pub async fn delete_key_copy(pool: &DbPool, key_copy_id: i32) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM key_copies WHERE id = $1")
        .bind(key_copy_id)
        .execute(pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::NotFound("Key copy"));
    }

    tracing::info!(key_copy_id, "key copy deleted");
    Ok(())
}
