//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, lists};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Lists API",
        version = "1.0.0",
        description = "Books and named reading lists REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        // Lists
        lists::list_lists,
        lists::create_list,
        lists::get_list,
        lists::rename_list,
        lists::update_list,
        lists::delete_list,
        // Membership
        lists::list_books_in_list,
        lists::add_book_to_list,
        lists::remove_book_from_list,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book_list::BookList,
            crate::models::book_list::CreateBookList,
            crate::models::book_list::UpdateBookList,
            crate::models::book_list_item::AddBookToList,
            lists::DetailResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog"),
        (name = "lists", description = "Book lists and their books")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
