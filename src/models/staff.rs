//! Staff data models and API request types.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A staff member record from the `staffs` table.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Staff {
    pub id: i32,
    pub name: String,
    pub role: String,
}

/// Request body for creating or replacing a staff member.
///
/// # JSON Example
///
/// ```json
/// { "name": "Alice", "role": "guard" }
/// ```
#[derive(Debug, Deserialize)]
pub struct StaffRequest {
    pub name: String,

    #[serde(default, deserialize_with = "super::nullable_text")]
    pub role: String,
}

impl StaffRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidRequest("name is required".to_string()));
        }
        super::check_text("name", &self.name)?;
        super::check_text("role", &self.role)
    }
}
