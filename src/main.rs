//! Book Lists Server
//!
//! REST API server for books and reading lists.

use std::net::SocketAddr;

use booklists_server::{api, config::AppConfig, repository::Repository, seed, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    booklists_server::init_tracing(&config.logging);

    tracing::info!("Starting Book Lists Server v{}", env!("CARGO_PKG_VERSION"));

    // Connect and bootstrap the schema
    let repository = Repository::connect(&config.database)
        .await
        .expect("Failed to open database");

    tracing::info!("Connected to database {}", config.database.url);

    if config.seed.on_startup {
        seed::seed_books(&repository).await?;
    }

    let addr = SocketAddr::new(
        config.server.host.parse().expect("Invalid host address"),
        config.server.port,
    );

    let state = AppState::new(repository);
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
