//! Book catalog service (read-only)

use crate::{error::AppResult, models::book::Book, repository::Repository};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await
    }
}
