// Loads the fixture data into the database named by DATABASE_URL.

use nc_news::{init_db, seed, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> nc_news::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nc_news=info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = init_db(&config.database_url, config.max_connections).await?;
    seed::seed(&pool, &seed::test_data()).await?;
    pool.close().await;
    Ok(())
}
