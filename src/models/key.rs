//! Key data models and API request types.
//!
//! This module defines:
//! - `Key`: a row of the `keys` table
//! - `KeyView`: a key joined with the name of the staff member holding it
//! - `KeyRequest`: request body for creating or replacing a key

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Represents a key record from the database.
///
/// # Database Table
///
/// Maps to the `keys` table. `staff_id` is `NULL` while the key is unassigned.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Key {
    /// Unique identifier for this key
    pub id: i32,

    /// Human-readable key name, e.g. "Front Door"
    pub name: String,

    pub description: String,

    /// Staff member the key is assigned to, if any
    pub staff_id: Option<i32>,
}

/// A key as shown in listings, with the assigned staff member's name.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "Front Door",
///   "description": "Main entrance",
///   "staff_id": 4,
///   "staff_name": "Alice"
/// }
/// ```
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct KeyView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub staff_id: Option<i32>,
    pub staff_name: Option<String>,
}

/// Request body for creating or replacing a key.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Front Door",
///   "description": "Main entrance",
///   "staff_id": 4
/// }
/// ```
///
/// # Validation
///
/// - `name`: Required, must not be blank
/// - `description`: Optional, defaults to ""
/// - `staff_id`: Optional; `0` or `null` leave the key unassigned
#[derive(Debug, Deserialize)]
pub struct KeyRequest {
    pub name: String,

    #[serde(default, deserialize_with = "super::nullable_text")]
    pub description: String,

    #[serde(default, deserialize_with = "super::optional_reference")]
    pub staff_id: Option<i32>,
}

impl KeyRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidRequest("name is required".to_string()));
        }
        super::check_text("name", &self.name)?;
        super::check_text("description", &self.description)
    }
}
