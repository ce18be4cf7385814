use anyhow::{Context, Result};
use content_translation_sync::config::Config;
use content_translation_sync::db::TranslationStore;
use content_translation_sync::server::{self, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("content_translation_sync=info".parse()?),
        )
        .init();

    info!("Starting content translation sync service");

    // Load configuration from environment
    let config = Config::from_env()?;
    let port = config.port;

    // Connect to PostgreSQL and make sure the table exists
    let store = TranslationStore::connect(&config.database_url).await?;
    store.init_schema().await?;

    let state = AppState::new(config, store)?;
    let app = server::create_router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    axum::serve(listener, app)
        .await
        .context("Failed to serve application")?;

    Ok(())
}
