//! Data models representing database entities.
//!
//! This module contains the row types that map to database tables, the
//! request bodies accepted by the API, and serde helpers shared by them.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// Key model
pub mod key;
/// Key copy model
pub mod key_copy;
/// Staff member model
pub mod staff;

/// Confirmation body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Reject text the store cannot hold. Postgres `TEXT` refuses NUL bytes.
pub(crate) fn check_text(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.contains('\0') {
        return Err(AppError::InvalidRequest(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}

/// Deserialize a foreign key where `0`, `null` and absence all mean "no reference".
///
/// Use together with `#[serde(default)]` so a missing field also lands here as `None`.
pub(crate) fn optional_reference<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<i32>::deserialize(deserializer)?;
    Ok(id.filter(|id| *id != 0))
}

/// Deserialize free text where `null` is treated as an empty string.
pub(crate) fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
