//! Key copy HTTP handlers.
//!
//! Listing filters on the name of the key a copy belongs to, so
//! `GET /key-copies?name=door` finds every copy of "Front Door".

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
        key_copy::{KeyCopy, KeyCopyRequest, KeyCopyView},
    },
    pagination::{ListParams, Page, PageRequest},
    services::key_copy_service,
};

/// List key copies.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "data": [
///     { "id": 3, "key_id": 1, "key_name": "Front Door", "staff_id": 4, "staff_name": "Alice" }
///   ],
///   "total": 1,
///   "page": 1,
///   "pageSize": 3,
///   "totalPages": 1
/// }
/// ```
pub async fn list_key_copies(
    State(pool): State<DbPool>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Page<KeyCopyView>>, AppError> {
    let request = PageRequest::from_query(query);
    Ok(Json(key_copy_service::list_key_copies(&pool, &request).await?))
}

pub async fn get_key_copy(
    State(pool): State<DbPool>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<KeyCopyView>, AppError> {
    let Path(key_copy_id) = path?;
    Ok(Json(key_copy_service::get_key_copy(&pool, key_copy_id).await?))
}

/// Create a key copy.
///
/// # Request Body
///
/// ```json
/// { "key_id": 1, "staff_id": 4 }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created copy
/// - **Error (400)**: Missing `key_id`, or `key_id` / `staff_id` does not exist
pub async fn create_key_copy(
    State(pool): State<DbPool>,
    payload: Result<Json<KeyCopyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let copy = key_copy_service::create_key_copy(&pool, request).await?;

    Ok((StatusCode::CREATED, Json(copy)))
}

pub async fn update_key_copy(
    State(pool): State<DbPool>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<KeyCopyRequest>, JsonRejection>,
) -> Result<Json<KeyCopy>, AppError> {
    let Path(key_copy_id) = path?;
    let Json(request) = payload?;

    Ok(Json(
        key_copy_service::update_key_copy(&pool, key_copy_id, request).await?,
    ))
}

pub async fn delete_key_copy(
    State(pool): State<DbPool>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(key_copy_id) = path?;
    key_copy_service::delete_key_copy(&pool, key_copy_id).await?;

    Ok(Json(MessageResponse::new("Key copy deleted successfully")))
}
