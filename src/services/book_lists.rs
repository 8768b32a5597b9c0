//! Book list service: list CRUD and list membership

use crate::{
    error::AppResult,
    models::{
        book::Book,
        book_list::{normalize_name, BookList, CreateBookList, UpdateBookList},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BookListsService {
    repository: Repository,
}

impl BookListsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all book lists, newest first
    pub async fn list(&self) -> AppResult<Vec<BookList>> {
        self.repository.book_lists_list().await
    }

    /// Get book list by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<BookList> {
        self.repository.book_lists_get_by_id(id).await
    }

    /// Create a book list
    pub async fn create(&self, data: &CreateBookList) -> AppResult<BookList> {
        let name = normalize_name(data.name.as_deref())?;
        let list = self.repository.book_lists_create(&name).await?;
        tracing::info!("Created book list id={} name={}", list.id, list);
        Ok(list)
    }

    /// Rename a book list (full update)
    pub async fn rename(&self, id: i64, data: &UpdateBookList) -> AppResult<BookList> {
        let name = normalize_name(data.name.as_deref())?;
        let list = self.repository.book_lists_rename(id, &name).await?;
        tracing::info!("Renamed book list id={} to {}", list.id, list);
        Ok(list)
    }

    /// Partial update: without a name the list is returned unchanged
    pub async fn update(&self, id: i64, data: &UpdateBookList) -> AppResult<BookList> {
        match data.name {
            Some(_) => self.rename(id, data).await,
            None => self.repository.book_lists_get_by_id(id).await,
        }
    }

    /// Delete a book list and its memberships
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.book_lists_delete(id).await?;
        tracing::info!("Deleted book list id={}", id);
        Ok(())
    }

    /// Books in a list, ordered by title. Fails if the list does not exist.
    pub async fn list_books(&self, id: i64) -> AppResult<Vec<Book>> {
        self.repository.book_lists_get_by_id(id).await?;
        self.repository.list_items_books(id).await
    }

    /// Add a book to a list. Adding a book that is already there succeeds
    /// without changing anything.
    pub async fn add_book(&self, id: i64, book_id: i64) -> AppResult<()> {
        let (item, created) = self.repository.list_items_add(id, book_id).await?;
        if created {
            tracing::info!("Added book {} to list {} (item id={})", book_id, id, item.id);
        } else {
            tracing::debug!(
                "Book {} already in list {} since {}",
                book_id,
                id,
                item.added_at
            );
        }
        Ok(())
    }

    /// Remove a book from a list
    pub async fn remove_book(&self, id: i64, book_id: i64) -> AppResult<()> {
        self.repository.list_items_remove(id, book_id).await?;
        tracing::info!("Removed book {} from list {}", book_id, id);
        Ok(())
    }
}
