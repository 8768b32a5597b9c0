//! Book model

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    /// Title, unique across the catalog
    pub title: String,
    /// Publication year
    pub year: i64,
    pub author_name: String,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}

/// New book data (seeding and repository-level inserts)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 255, message = "title must be 1 to 255 characters"))]
    pub title: String,
    #[validate(range(min = 0, message = "year must not be negative"))]
    pub year: i64,
    #[validate(length(min = 1, max = 255, message = "author_name must be 1 to 255 characters"))]
    pub author_name: String,
}

impl CreateBook {
    pub fn new(title: &str, year: i64, author_name: &str) -> Self {
        Self {
            title: title.to_string(),
            year,
            author_name: author_name.to_string(),
        }
    }
}
