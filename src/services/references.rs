//! Existence checks shared by the entity services.
//!
//! Each check runs on the caller's transaction and locks the row it finds,
//! so the referenced record cannot be deleted before the caller's write
//! commits.

use sqlx::PgConnection;

use crate::error::AppError;

/// Fail with `InvalidReference("Staff")` unless the staff member exists.
/// `None` means "unassigned" and always passes.
pub async fn ensure_staff_exists(
    conn: &mut PgConnection,
    staff_id: Option<i32>,
) -> Result<(), AppError> {
    let Some(staff_id) = staff_id else {
        return Ok(());
    };

    let found: Option<i32> = sqlx::query_scalar("SELECT id FROM staffs WHERE id = $1 FOR SHARE")
        .bind(staff_id)
        .fetch_optional(&mut *conn)
        .await?;

    if found.is_none() {
        tracing::warn!(staff_id, "rejected write referencing missing staff");
        return Err(AppError::InvalidReference("Staff"));
    }
    Ok(())
}

/// Fail with `InvalidReference("Key")` unless the key exists.
pub async fn ensure_key_exists(conn: &mut PgConnection, key_id: i32) -> Result<(), AppError> {
    let found: Option<i32> = sqlx::query_scalar("SELECT id FROM keys WHERE id = $1 FOR SHARE")
        .bind(key_id)
        .fetch_optional(&mut *conn)
        .await?;

    if found.is_none() {
        tracing::warn!(key_id, "rejected write referencing missing key");
        return Err(AppError::InvalidReference("Key"));
    }
    Ok(())
}

/// Lock the target row of an update or delete, or fail with `NotFound(label)`.
///
/// `statement` must select the id column with `FOR UPDATE`, binding the id as `$1`.
pub async fn lock_existing(
    conn: &mut PgConnection,
    statement: &'static str,
    id: i32,
    label: &'static str,
) -> Result<(), AppError> {
    sqlx::query_scalar::<_, i32>(statement)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .map(|_| ())
        .ok_or(AppError::NotFound(label))
}
