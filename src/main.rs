use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use demo_api_rust::auth::{PasswordHasher, TokenIssuer};
use demo_api_rust::config::AppConfig;
use demo_api_rust::database::{
    DatabaseManager, MemoryUserRepository, PgUserRepository, UserRepository,
};
use demo_api_rust::services::AuthService;
use demo_api_rust::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("demo_api_rust=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    config.validate().context("invalid configuration")?;
    tracing::info!("Starting Demo API in {:?} mode", config.environment);

    let (users, database): (Arc<dyn UserRepository>, Option<DatabaseManager>) =
        match config.database.url {
            Some(_) => {
                let manager = DatabaseManager::connect(&config.database)
                    .await
                    .context("failed to connect to database")?;
                manager
                    .ensure_schema()
                    .await
                    .context("failed to prepare database schema")?;
                let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(manager.pool()));
                (users, Some(manager))
            }
            None => {
                tracing::warn!("DATABASE_URL not set, users are kept in memory");
                let users: Arc<dyn UserRepository> = Arc::new(MemoryUserRepository::new());
                (users, None)
            }
        };

    let issuer = TokenIssuer::from_config(&config.security).context("invalid JWT settings")?;
    let auth = AuthService::new(users, PasswordHasher::new(), issuer);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let app = demo_api_rust::app(AppState::new(config, auth));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Demo API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(manager) = database {
        manager.close().await;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
