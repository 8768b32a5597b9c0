//! Initial book catalog

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::CreateBook,
    repository::Repository,
};

/// Books inserted by `seed_books`: (title, year, author)
pub const DEFAULT_BOOKS: [(&str, i64, &str); 5] = [
    ("Dune", 1965, "Frank Herbert"),
    ("Ender's Game", 1985, "Orson Scott Card"),
    ("1984", 1949, "George Orwell"),
    ("Fahrenheit 451", 1953, "Ray Bradbury"),
    ("Brave New World", 1932, "Aldous Huxley"),
];

/// Insert the default catalog. Titles already present are left as they are.
/// Returns the number of books created.
pub async fn seed_books(repository: &Repository) -> AppResult<usize> {
    let mut created_count = 0;

    for (title, year, author_name) in DEFAULT_BOOKS {
        let data = CreateBook::new(title, year, author_name);
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let (book, created) = repository.books_get_or_create(&data).await?;
        if created {
            tracing::debug!("Seeded {}", book);
            created_count += 1;
        }
    }

    tracing::info!("Seed complete. Created {} new books.", created_count);
    Ok(created_count)
}
