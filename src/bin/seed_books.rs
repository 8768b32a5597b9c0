//! Seed the initial book catalog

use booklists_server::{config::AppConfig, repository::Repository, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    booklists_server::init_tracing(&config.logging);

    let repository = Repository::connect(&config.database).await?;
    let created = seed::seed_books(&repository).await?;

    println!("Seed complete. Created {} new books.", created);
    Ok(())
}
