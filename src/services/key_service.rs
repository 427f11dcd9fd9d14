//! Key service - CRUD for keys.
//!
//! Writes that carry a `staff_id` validate it inside the same transaction as
//! the write. Deleting a key is refused while key copies still reference it.

use crate::{
    db::DbPool,
    error::AppError,
    models::key::{Key, KeyRequest, KeyView},
    pagination::{Page, PageRequest},
    query::{self, ListQuery},
};

use super::references::{ensure_staff_exists, lock_existing};

/// Key listing: joined with the holder's name, filtered on the key name.
pub const KEY_LISTING: ListQuery = ListQuery {
    from: "keys k LEFT JOIN staffs s ON s.id = k.staff_id",
    columns: "k.id, k.name, k.description, k.staff_id, s.name AS staff_name",
    filter_column: "k.name",
    id_column: "k.id",
};

const LOCK_KEY: &str = "SELECT id FROM keys WHERE id = $1 FOR UPDATE";

pub async fn list_keys(pool: &DbPool, request: &PageRequest) -> Result<Page<KeyView>, AppError> {
    Ok(query::fetch_page(pool, &KEY_LISTING, request).await?)
}

pub async fn get_key(pool: &DbPool, key_id: i32) -> Result<KeyView, AppError> {
    query::fetch_by_id(pool, &KEY_LISTING, key_id)
        .await?
        .ok_or(AppError::NotFound("Key"))
}

/// Create a key, optionally assigned to an existing staff member.
///
/// # Errors
///
/// - `InvalidRequest`: blank name
/// - `InvalidReference`: `staff_id` does not resolve
/// - `Database`: Database error occurred
pub async fn create_key(pool: &DbPool, request: KeyRequest) -> Result<Key, AppError> {
    request.validate()?;

    let mut tx = pool.begin().await?;
    ensure_staff_exists(&mut *tx, request.staff_id).await?;

    let key = sqlx::query_as::<_, Key>(
        r#"
        INSERT INTO keys (name, description, staff_id)
        VALUES ($1, $2, $3)
        RETURNING id, name, description, staff_id
        "#,
    )
    .bind(request.name)
    .bind(request.description)
    .bind(request.staff_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(key_id = key.id, staff_id = ?key.staff_id, "key created");
    Ok(key)
}

/// Replace every field of an existing key.
pub async fn update_key(pool: &DbPool, key_id: i32, request: KeyRequest) -> Result<Key, AppError> {
    request.validate()?;

    let mut tx = pool.begin().await?;
    lock_existing(&mut *tx, LOCK_KEY, key_id, "Key").await?;
    ensure_staff_exists(&mut *tx, request.staff_id).await?;

    let key = sqlx::query_as::<_, Key>(
        r#"
        UPDATE keys
        SET name = $1, description = $2, staff_id = $3
        WHERE id = $4
        RETURNING id, name, description, staff_id
        "#,
    )
    .bind(request.name)
    .bind(request.description)
    .bind(request.staff_id)
    .bind(key_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(key_id, staff_id = ?key.staff_id, "key updated");
    Ok(key)
}

/// Delete a key that has no copies.
///
/// The key row is locked first, so a concurrent key-copy insert either
/// commits before the copy count is read or waits until the delete finishes
/// and then fails its own existence check.
///
/// # Errors
///
/// - `NotFound`: key does not exist
/// - `DeleteBlocked`: one or more key copies reference the key
pub async fn delete_key(pool: &DbPool, key_id: i32) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    lock_existing(&mut *tx, LOCK_KEY, key_id, "Key").await?;

    let copies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM key_copies WHERE key_id = $1")
        .bind(key_id)
        .fetch_one(&mut *tx)
        .await?;

    if copies > 0 {
        tx.rollback().await?;
        tracing::warn!(key_id, copies, "refused to delete key with copies");
        return Err(AppError::DeleteBlocked(format!(
            "Cannot delete key: {copies} key copies still reference it"
        )));
    }

    sqlx::query("DELETE FROM keys WHERE id = $1")
        .bind(key_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(key_id, "key deleted");
    Ok(())
}
