//! Staff service - CRUD for staff members.

use crate::{
    db::DbPool,
    error::AppError,
    models::staff::{Staff, StaffRequest},
    pagination::{Page, PageRequest},
    query::{self, ListQuery},
};

use super::references::lock_existing;

/// Staff listing: no joins, filtered on the staff member's name.
pub const STAFF_LISTING: ListQuery = ListQuery {
    from: "staffs s",
    columns: "s.id, s.name, s.role",
    filter_column: "s.name",
    id_column: "s.id",
};

pub async fn list_staff(pool: &DbPool, request: &PageRequest) -> Result<Page<Staff>, AppError> {
    Ok(query::fetch_page(pool, &STAFF_LISTING, request).await?)
}

pub async fn get_staff(pool: &DbPool, staff_id: i32) -> Result<Staff, AppError> {
    query::fetch_by_id(pool, &STAFF_LISTING, staff_id)
        .await?
        .ok_or(AppError::NotFound("Staff"))
}

pub async fn create_staff(pool: &DbPool, request: StaffRequest) -> Result<Staff, AppError> {
    request.validate()?;

    let staff = sqlx::query_as::<_, Staff>(
        "INSERT INTO staffs (name, role) VALUES ($1, $2) RETURNING id, name, role",
    )
    .bind(request.name)
    .bind(request.role)
    .fetch_one(pool)
    .await?;

    tracing::info!(staff_id = staff.id, "staff created");
    Ok(staff)
}

/// Replace a staff member's name and role.
pub async fn update_staff(
    pool: &DbPool,
    staff_id: i32,
    request: StaffRequest,
) -> Result<Staff, AppError> {
    request.validate()?;

    let mut tx = pool.begin().await?;
    lock_existing(
        &mut *tx,
        "SELECT id FROM staffs WHERE id = $1 FOR UPDATE",
        staff_id,
        "Staff",
    )
    .await?;

    let staff = sqlx::query_as::<_, Staff>(
        "UPDATE staffs SET name = $1, role = $2 WHERE id = $3 RETURNING id, name, role",
    )
    .bind(request.name)
    .bind(request.role)
    .bind(staff_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(staff_id, "staff updated");
    Ok(staff)
}

/// Delete a staff member. Keys and key copies held by them become unassigned.
pub async fn delete_staff(pool: &DbPool, staff_id: i32) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM staffs WHERE id = $1")
        .bind(staff_id)
        .execute(pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::NotFound("Staff"));
    }

    tracing::info!(staff_id, "staff deleted");
    Ok(())
}
