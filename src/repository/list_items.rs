//! List membership methods on Repository

use chrono::Utc;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{book::Book, book_list_item::BookListItem},
};

impl Repository {
    /// Books that belong to a list, ordered by title.
    /// Does not check that the list exists.
    pub async fn list_items_books(&self, book_list_id: i64) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.id, b.title, b.year, b.author_name
            FROM books b
            JOIN book_list_items i ON i.book_id = b.id
            WHERE i.book_list_id = ?
            ORDER BY b.title, b.id
            "#,
        )
        .bind(book_list_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get the membership row for a (list, book) pair
    pub async fn list_items_get(
        &self,
        book_list_id: i64,
        book_id: i64,
    ) -> AppResult<Option<BookListItem>> {
        let row = sqlx::query_as::<_, BookListItem>(
            r#"
            SELECT id, book_list_id, book_id, added_at FROM book_list_items
            WHERE book_list_id = ? AND book_id = ?
            "#,
        )
        .bind(book_list_id)
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Number of books in a list
    pub async fn list_items_count(&self, book_list_id: i64) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM book_list_items WHERE book_list_id = ?")
                .bind(book_list_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// Add a book to a list if it is not already there.
    ///
    /// Existence checks and the insert run as one statement, so concurrent
    /// callers wait on the busy timeout for the write lock. The
    /// `(book_list_id, book_id)` UNIQUE constraint leaves exactly one row per
    /// pair. When nothing was inserted and no row exists, the list is reported
    /// missing before the book. Returns the row and whether it was created.
    pub async fn list_items_add(
        &self,
        book_list_id: i64,
        book_id: i64,
    ) -> AppResult<(BookListItem, bool)> {
        let result = sqlx::query(
            r#"
            INSERT INTO book_list_items (book_list_id, book_id, added_at)
            SELECT ?1, ?2, ?3
            WHERE EXISTS (SELECT 1 FROM book_lists WHERE id = ?1)
              AND EXISTS (SELECT 1 FROM books WHERE id = ?2)
            ON CONFLICT (book_list_id, book_id) DO NOTHING
            "#,
        )
        .bind(book_list_id)
        .bind(book_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::on_foreign_key_violation(e, "Book or book list not found"))?;

        if let Some(item) = self.list_items_get(book_list_id, book_id).await? {
            return Ok((item, result.rows_affected() == 1));
        }

        self.book_lists_get_by_id(book_list_id).await?;
        self.books_get_by_id(book_id).await?;
        // Both exist but the row is gone: removed between insert and read
        Err(AppError::NotFound("not found".to_string()))
    }

    /// Remove a book from a list. A missing membership is `NotFound`,
    /// whatever the reason.
    pub async fn list_items_remove(&self, book_list_id: i64, book_id: i64) -> AppResult<()> {
        let result =
            sqlx::query("DELETE FROM book_list_items WHERE book_list_id = ? AND book_id = ?")
                .bind(book_list_id)
                .bind(book_id)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("not found".to_string()));
        }
        Ok(())
    }
}
