//! Book Lists catalog service
//!
//! A REST JSON API for a catalog of books and named reading lists, with
//! idempotent list membership backed by SQLite.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod seed;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(repository: repository::Repository) -> Self {
        Self {
            services: Arc::new(services::Services::new(repository)),
        }
    }
}

/// Initialize tracing from the logging configuration.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(logging: &config::LoggingConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("booklists_server={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
