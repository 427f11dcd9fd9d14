//! Key HTTP handlers.
//!
//! This module implements the key endpoints:
//! - GET /keys - Paginated, filterable list
//! - GET /keys/{id} - Get key by ID
//! - POST /keys - Create key
//! - PUT /keys/{id} - Replace key
//! - DELETE /keys/{id} - Delete key (refused while copies exist)

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
        key::{Key, KeyRequest, KeyView},
    },
    pagination::{ListParams, Page, PageRequest},
    services::key_service,
};

/// List keys.
///
/// # Query Parameters
///
/// - `page` - 1-indexed page, defaults to 1
/// - `pageSize` - rows per page, defaults to 3
/// - `name` - case-insensitive substring of the key name
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "data": [
///     { "id": 1, "name": "Front Door", "description": "", "staff_id": 4, "staff_name": "Alice" }
///   ],
///   "total": 1,
///   "page": 1,
///   "pageSize": 3,
///   "totalPages": 1
/// }
/// ```
pub async fn list_keys(
    State(pool): State<DbPool>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Page<KeyView>>, AppError> {
    let request = PageRequest::from_query(query);
    Ok(Json(key_service::list_keys(&pool, &request).await?))
}

/// Get a key with the name of the staff member holding it.
///
/// - **Error (404)**: Key not found
pub async fn get_key(
    State(pool): State<DbPool>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<KeyView>, AppError> {
    let Path(key_id) = path?;
    Ok(Json(key_service::get_key(&pool, key_id).await?))
}

/// Create a key.
///
/// # Request Body
///
/// ```json
/// { "name": "Front Door", "description": "Main entrance", "staff_id": 4 }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created key with its id
/// - **Error (400)**: Malformed body, blank name, or unknown `staff_id`
pub async fn create_key(
    State(pool): State<DbPool>,
    payload: Result<Json<KeyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let key = key_service::create_key(&pool, request).await?;

    Ok((StatusCode::CREATED, Json(key)))
}

/// Replace a key.
///
/// - **Success (200 OK)**: Returns the updated key
/// - **Error (400)**: Malformed body, blank name, or unknown `staff_id`
/// - **Error (404)**: Key not found
pub async fn update_key(
    State(pool): State<DbPool>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<KeyRequest>, JsonRejection>,
) -> Result<Json<Key>, AppError> {
    let Path(key_id) = path?;
    let Json(request) = payload?;

    Ok(Json(key_service::update_key(&pool, key_id, request).await?))
}

/// Delete a key.
///
/// - **Success (200 OK)**: `{"message": "Key deleted successfully"}`
/// - **Error (400)**: Key copies still reference this key
/// - **Error (404)**: Key not found
pub async fn delete_key(
    State(pool): State<DbPool>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(key_id) = path?;
    key_service::delete_key(&pool, key_id).await?;

    Ok(Json(MessageResponse::new("Key deleted successfully")))
}
