//! Key copy data models and API request types.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A physical duplicate of a key, optionally checked out to a staff member.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct KeyCopy {
    pub id: i32,
    pub key_id: i32,
    pub staff_id: Option<i32>,
}

/// A key copy as shown in listings, with the key and staff names joined in.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 3,
///   "key_id": 1,
///   "key_name": "Front Door",
///   "staff_id": null,
///   "staff_name": null
/// }
/// ```
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct KeyCopyView {
    pub id: i32,
    pub key_id: i32,
    pub key_name: String,
    pub staff_id: Option<i32>,
    pub staff_name: Option<String>,
}

/// Request body for creating or replacing a key copy.
///
/// `key_id` is required; `staff_id` may be `0`, `null` or omitted.
#[derive(Debug, Deserialize)]
pub struct KeyCopyRequest {
    #[serde(default, deserialize_with = "super::optional_reference")]
    pub key_id: Option<i32>,

    #[serde(default, deserialize_with = "super::optional_reference")]
    pub staff_id: Option<i32>,
}

impl KeyCopyRequest {
    /// Check the body and return the referenced key id.
    pub fn validate(&self) -> Result<i32, AppError> {
        self.key_id
            .ok_or_else(|| AppError::InvalidRequest("key_id is required".to_string()))
    }
}
