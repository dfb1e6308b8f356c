use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use watcher_api::auth::JwtAuthenticationContext;
use watcher_api::config;
use watcher_api::database::DatabaseManager;
use watcher_api::permission::AccessLevelPermissionHelper;
use watcher_api::router;
use watcher_api::services::{InMemoryWatcherService, PgWatcherService, WatcherService};
use watcher_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, SECURITY_JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("watcher_api=info,tower_http=info")),
        )
        .init();

    let config = config::config();
    tracing::info!("Starting Watcher API in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        tracing::warn!("SECURITY_JWT_SECRET is not set; authenticated requests will fail");
    }

    let watcher_service: Arc<dyn WatcherService> = match config.database.url {
        Some(_) => {
            let pool = DatabaseManager::connect(&config.database)
                .await
                .context("failed to connect watcher database")?;
            let service = PgWatcherService::new(pool);
            service
                .ensure_schema()
                .await
                .context("failed to prepare watcher schema")?;
            Arc::new(service)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; watchers are kept in memory");
            Arc::new(InMemoryWatcherService::new())
        }
    };

    let state = AppState::new(
        Arc::new(JwtAuthenticationContext::new(config.security.jwt_secret.clone())),
        Arc::new(AccessLevelPermissionHelper),
        watcher_service,
    );

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Watcher API listening on http://{}", bind_addr);

    axum::serve(listener, router::app(state))
        .await
        .context("server error")?;
    Ok(())
}
