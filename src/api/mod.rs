//! API handlers for Book Lists REST endpoints

pub mod books;
pub mod health;
pub mod lists;
pub mod openapi;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    routing::{delete, get, patch, post, put},
    Router,
};
use serde_json::{Map, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Books
        .route("/books/", get(books::list_books))
        .route("/books/:id/", get(books::get_book))
        // Lists
        .route("/lists/", get(lists::list_lists))
        .route("/lists/", post(lists::create_list))
        .route("/lists/:id/", get(lists::get_list))
        .route("/lists/:id/", put(lists::rename_list))
        .route("/lists/:id/", patch(lists::update_list))
        .route("/lists/:id/", delete(lists::delete_list))
        // List membership
        .route("/lists/:id/books/", get(lists::list_books_in_list))
        .route("/lists/:id/books/", post(lists::add_book_to_list))
        .route("/lists/:id/books/:book_id/", delete(lists::remove_book_from_list))
        .with_state(state.clone());

    let health = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(health)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Parse an identifier taken from the URL. Anything that is not an
/// integer cannot name a row, so it is reported as not found.
pub(crate) fn parse_id(raw: &str, what: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::NotFound(format!("{} {} not found", what, raw)))
}

/// Loosely parsed JSON object body.
///
/// An empty body reads as `{}` so that a missing field is reported by the
/// handler rather than rejected by the framework.
#[derive(Debug, Default)]
pub struct JsonBody(pub Map<String, Value>);

impl JsonBody {
    pub fn parse(bytes: &[u8]) -> AppResult<Self> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(_) => Err(AppError::Validation(
                "Request body must be a JSON object".to_string(),
            )),
            Err(e) => Err(AppError::Validation(format!("Invalid JSON body: {}", e))),
        }
    }

    /// Raw field value; `null` counts as absent
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Optional string field. Present values of another type are rejected.
    pub fn string_field(&self, key: &str) -> AppResult<Option<String>> {
        match self.field(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(AppError::Validation(format!("{} must be a string", key))),
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Self::parse(&bytes)
    }
}
