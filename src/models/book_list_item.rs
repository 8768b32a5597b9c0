//! List membership model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Membership row linking one book to one list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BookListItem {
    pub id: i64,
    pub book_list_id: i64,
    pub book_id: i64,
    pub added_at: DateTime<Utc>,
}

/// Add book to list request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct AddBookToList {
    /// ID of an existing book; a numeric string is accepted too
    pub book_id: i64,
}

impl AddBookToList {
    /// Build the request from the raw `book_id` field of a JSON body.
    ///
    /// Absent, `null` and empty-string values are "missing"; anything that is
    /// not a positive integer (or a string holding one) is rejected.
    pub fn from_field(value: Option<&Value>) -> AppResult<Self> {
        let book_id = match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(Value::Number(n)) => Some(n.as_i64().filter(|id| *id > 0)),
            Some(Value::String(s)) => Some(s.trim().parse::<i64>().ok().filter(|id| *id > 0)),
            Some(_) => Some(None),
        };

        match book_id {
            None => Err(AppError::Validation("book_id is required".to_string())),
            Some(None) => Err(AppError::Validation(
                "book_id must be a positive integer".to_string(),
            )),
            Some(Some(book_id)) => Ok(Self { book_id }),
        }
    }
}
