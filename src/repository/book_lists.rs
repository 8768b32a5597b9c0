//! Book list domain methods on Repository

use chrono::Utc;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::book_list::BookList,
};

const DUPLICATE_NAME: &str = "book list with this name already exists.";

impl Repository {
    /// List all book lists, newest first
    pub async fn book_lists_list(&self) -> AppResult<Vec<BookList>> {
        let rows = sqlx::query_as::<_, BookList>(
            "SELECT id, name, created_at FROM book_lists ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get book list by ID
    pub async fn book_lists_get_by_id(&self, id: i64) -> AppResult<BookList> {
        sqlx::query_as::<_, BookList>("SELECT id, name, created_at FROM book_lists WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book list {} not found", id)))
    }

    /// Create a book list. The UNIQUE constraint on `name` decides duplicates.
    pub async fn book_lists_create(&self, name: &str) -> AppResult<BookList> {
        // RETURNING statements are drained with fetch_all so the write
        // commits before the connection is reused
        let mut rows = sqlx::query_as::<_, BookList>(
            r#"
            INSERT INTO book_lists (name, created_at)
            VALUES (?, ?)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .bind(Utc::now())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::on_unique_violation(e, DUPLICATE_NAME))?;
        rows.pop()
            .ok_or_else(|| AppError::Internal("Book list insert returned no row".to_string()))
    }

    /// Rename a book list
    pub async fn book_lists_rename(&self, id: i64, name: &str) -> AppResult<BookList> {
        let mut rows = sqlx::query_as::<_, BookList>(
            "UPDATE book_lists SET name = ? WHERE id = ? RETURNING id, name, created_at",
        )
        .bind(name)
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::on_unique_violation(e, DUPLICATE_NAME))?;
        rows.pop()
            .ok_or_else(|| AppError::NotFound(format!("Book list {} not found", id)))
    }

    /// Delete a book list along with its memberships
    pub async fn book_lists_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM book_lists WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book list {} not found", id)));
        }
        Ok(())
    }
}
