//! Book catalog endpoints (read-only)

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::book::Book};

use super::parse_id;

/// List all books, ordered by title
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    responses(
        (status = 200, description = "Books ordered by title", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}/",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let id = parse_id(&id, "Book")?;
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}
