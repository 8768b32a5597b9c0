//! Book domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

impl Repository {
    /// List all books, ordered by title
    pub async fn books_list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, title, year, author_name FROM books ORDER BY title, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT id, title, year, author_name FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Find a book by its exact title
    pub async fn books_find_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            "SELECT id, title, year, author_name FROM books WHERE title = ?",
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Insert a book. A taken title is a `Conflict`.
    pub async fn books_create(&self, data: &CreateBook) -> AppResult<Book> {
        // fetch_all drains the RETURNING statement so the implicit
        // transaction commits before the connection goes back to the pool
        let mut rows = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, year, author_name)
            VALUES (?, ?, ?)
            RETURNING id, title, year, author_name
            "#,
        )
        .bind(&data.title)
        .bind(data.year)
        .bind(&data.author_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::on_unique_violation(e, format!("A book titled '{}' already exists", data.title))
        })?;
        rows.pop()
            .ok_or_else(|| AppError::Internal("Book insert returned no row".to_string()))
    }

    /// Insert a book unless one with the same title exists.
    /// The existing row is returned untouched; the flag tells whether a row was created.
    pub async fn books_get_or_create(&self, data: &CreateBook) -> AppResult<(Book, bool)> {
        match self.books_create(data).await {
            Ok(book) => Ok((book, true)),
            Err(AppError::Conflict(_)) => {
                let book = self.books_find_by_title(&data.title).await?.ok_or_else(|| {
                    AppError::Internal(format!("Book '{}' vanished after a title conflict", data.title))
                })?;
                Ok((book, false))
            }
            Err(e) => Err(e),
        }
    }

    /// Delete a book. Its list memberships go with it.
    pub async fn books_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
