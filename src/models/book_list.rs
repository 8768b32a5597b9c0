//! Book list (named collection) model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Maximum length of a list name, in characters
pub const NAME_MAX_LEN: usize = 255;

/// Book list record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookList {
    pub id: i64,
    /// Name, unique across all lists
    pub name: String,
    /// Set once when the list is created
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for BookList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Create list request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBookList {
    pub name: Option<String>,
}

/// Rename list request. A missing name leaves the list unchanged on PATCH.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBookList {
    pub name: Option<String>,
}

/// Trim and check a list name.
pub fn normalize_name(name: Option<&str>) -> AppResult<String> {
    let name = name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "name must be at most {} characters",
            NAME_MAX_LEN
        )));
    }
    Ok(name.to_string())
}
