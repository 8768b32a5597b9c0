//! Repository layer for database operations

pub mod book_lists;
pub mod books;
pub mod list_items;

use std::{str::FromStr, time::Duration};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    Pool, Sqlite,
};

use crate::{config::DatabaseConfig, error::AppResult};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Open the pool described by `config` and bring the schema up to date
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        let pool_options = if config.is_in_memory() {
            // Every connection to `:memory:` would otherwise see its own empty database
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            options = options.journal_mode(SqliteJournalMode::Wal);
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .min_connections(config.min_connections)
        };

        let pool = pool_options.connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::new(pool))
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
