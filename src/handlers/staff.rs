//! Staff HTTP handlers.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        MessageResponse,
        staff::{Staff, StaffRequest},
    },
    pagination::{ListParams, Page, PageRequest},
    services::staff_service,
};

/// `GET /staff` - paginated list, `name` filters on the staff member's name.
pub async fn list_staff(
    State(pool): State<DbPool>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Page<Staff>>, AppError> {
    let request = PageRequest::from_query(query);
    Ok(Json(staff_service::list_staff(&pool, &request).await?))
}

/// `GET /staff/{id}`
pub async fn get_staff(
    State(pool): State<DbPool>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Staff>, AppError> {
    let Path(staff_id) = path?;
    Ok(Json(staff_service::get_staff(&pool, staff_id).await?))
}

/// `POST /staff` - returns 201 with the generated id.
///
/// ```json
/// { "name": "Alice", "role": "guard" }
/// ```
pub async fn create_staff(
    State(pool): State<DbPool>,
    payload: Result<Json<StaffRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let staff = staff_service::create_staff(&pool, request).await?;

    Ok((StatusCode::CREATED, Json(staff)))
}

/// `PUT /staff/{id}`
pub async fn update_staff(
    State(pool): State<DbPool>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<StaffRequest>, JsonRejection>,
) -> Result<Json<Staff>, AppError> {
    let Path(staff_id) = path?;
    let Json(request) = payload?;

    Ok(Json(staff_service::update_staff(&pool, staff_id, request).await?))
}

/// `DELETE /staff/{id}` - keys and copies they held become unassigned.
pub async fn delete_staff(
    State(pool): State<DbPool>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(staff_id) = path?;
    staff_service::delete_staff(&pool, staff_id).await?;

    Ok(Json(MessageResponse::new("Staff deleted successfully")))
}
