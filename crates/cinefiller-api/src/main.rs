//! Cinefiller API server entry point.

use std::sync::Arc;

use cinefiller_api::config::AppConfig;
use cinefiller_api::error::AppError;
use cinefiller_api::state::AppState;
use cinefiller_store::MIGRATOR;
use cinefiller_store::pg_character_repository::PgCharacterRepository;
use cinefiller_store::pg_content_repository::PgContentRepository;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Cinefiller API server");

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    MIGRATOR.run(&pool).await?;

    let app_state = AppState::new(
        Arc::new(PgContentRepository::new(pool.clone())),
        Arc::new(PgCharacterRepository::new(pool)),
    );

    let app = cinefiller_api::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
