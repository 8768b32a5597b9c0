//! Business logic services

pub mod book_lists;
pub mod books;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub book_lists: book_lists::BookListsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.clone()),
            book_lists: book_lists::BookListsService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the database answers
    pub async fn check_database(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
