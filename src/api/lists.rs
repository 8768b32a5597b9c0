//! Book list endpoints: list CRUD and membership

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        book_list::{BookList, CreateBookList, UpdateBookList},
        book_list_item::AddBookToList,
    },
};

use super::{parse_id, JsonBody};

/// Plain acknowledgement body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DetailResponse {
    pub detail: String,
}

/// List all book lists, newest first
#[utoipa::path(
    get,
    path = "/lists/",
    tag = "lists",
    responses(
        (status = 200, description = "Book lists, newest first", body = Vec<BookList>)
    )
)]
pub async fn list_lists(State(state): State<crate::AppState>) -> AppResult<Json<Vec<BookList>>> {
    let lists = state.services.book_lists.list().await?;
    Ok(Json(lists))
}

/// Create a book list
#[utoipa::path(
    post,
    path = "/lists/",
    tag = "lists",
    request_body = CreateBookList,
    responses(
        (status = 201, description = "Book list created", body = BookList),
        (status = 400, description = "Missing or duplicate name", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_list(
    State(state): State<crate::AppState>,
    body: JsonBody,
) -> AppResult<(StatusCode, Json<BookList>)> {
    let data = CreateBookList {
        name: body.string_field("name")?,
    };
    let list = state.services.book_lists.create(&data).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// Get book list by ID
#[utoipa::path(
    get,
    path = "/lists/{id}/",
    tag = "lists",
    params(("id" = i64, Path, description = "Book list ID")),
    responses(
        (status = 200, description = "Book list details", body = BookList),
        (status = 404, description = "Book list not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_list(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookList>> {
    let id = parse_id(&id, "Book list")?;
    let list = state.services.book_lists.get_by_id(id).await?;
    Ok(Json(list))
}

/// Rename a book list
#[utoipa::path(
    put,
    path = "/lists/{id}/",
    tag = "lists",
    params(("id" = i64, Path, description = "Book list ID")),
    request_body = UpdateBookList,
    responses(
        (status = 200, description = "Book list renamed", body = BookList),
        (status = 400, description = "Missing or duplicate name", body = crate::error::ErrorResponse),
        (status = 404, description = "Book list not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn rename_list(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> AppResult<Json<BookList>> {
    let data = UpdateBookList {
        name: body.string_field("name")?,
    };
    let id = parse_id(&id, "Book list")?;
    let list = state.services.book_lists.rename(id, &data).await?;
    Ok(Json(list))
}

/// Partially update a book list
#[utoipa::path(
    patch,
    path = "/lists/{id}/",
    tag = "lists",
    params(("id" = i64, Path, description = "Book list ID")),
    request_body = UpdateBookList,
    responses(
        (status = 200, description = "Book list updated", body = BookList),
        (status = 400, description = "Blank or duplicate name", body = crate::error::ErrorResponse),
        (status = 404, description = "Book list not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_list(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> AppResult<Json<BookList>> {
    let data = UpdateBookList {
        name: body.string_field("name")?,
    };
    let id = parse_id(&id, "Book list")?;
    let list = state.services.book_lists.update(id, &data).await?;
    Ok(Json(list))
}

/// Delete a book list (its memberships go with it)
#[utoipa::path(
    delete,
    path = "/lists/{id}/",
    tag = "lists",
    params(("id" = i64, Path, description = "Book list ID")),
    responses(
        (status = 204, description = "Book list deleted"),
        (status = 404, description = "Book list not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_list(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, "Book list")?;
    state.services.book_lists.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the books in a book list, ordered by title
#[utoipa::path(
    get,
    path = "/lists/{id}/books/",
    tag = "lists",
    params(("id" = i64, Path, description = "Book list ID")),
    responses(
        (status = 200, description = "Books in the list", body = Vec<Book>),
        (status = 404, description = "Book list not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books_in_list(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let id = parse_id(&id, "Book list")?;
    let books = state.services.book_lists.list_books(id).await?;
    Ok(Json(books))
}

/// Add a book to a book list.
///
/// Adding a book that is already in the list succeeds with the same response.
#[utoipa::path(
    post,
    path = "/lists/{id}/books/",
    tag = "lists",
    params(("id" = i64, Path, description = "Book list ID")),
    request_body = AddBookToList,
    responses(
        (status = 201, description = "Book is in the list", body = DetailResponse),
        (status = 400, description = "Missing or malformed book_id", body = crate::error::ErrorResponse),
        (status = 404, description = "Book list or book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book_to_list(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> AppResult<(StatusCode, Json<DetailResponse>)> {
    // The body is checked before the list is looked up
    let request = AddBookToList::from_field(body.field("book_id"))?;
    let id = parse_id(&id, "Book list")?;
    state
        .services
        .book_lists
        .add_book(id, request.book_id)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DetailResponse {
            detail: "added".to_string(),
        }),
    ))
}

/// Remove a book from a book list
#[utoipa::path(
    delete,
    path = "/lists/{id}/books/{book_id}/",
    tag = "lists",
    params(
        ("id" = i64, Path, description = "Book list ID"),
        ("book_id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book removed from the list"),
        (status = 404, description = "Book is not in the list", body = crate::error::ErrorResponse)
    )
)]
pub async fn remove_book_from_list(
    State(state): State<crate::AppState>,
    Path((id, book_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let (Ok(id), Ok(book_id)) = (id.parse::<i64>(), book_id.parse::<i64>()) else {
        return Err(AppError::NotFound("not found".to_string()));
    };
    state.services.book_lists.remove_book(id, book_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
