//! Server initialization: connect the database, run migrations, build the
//! router.

use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;

use crate::auth::sessions::TokenKeys;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application.
///
/// Connects the SQLite pool, applies embedded migrations, and wires the
/// router with the shared state. Migration failure is fatal: the schema
/// carries the uniqueness constraints the handlers rely on.
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Connecting to database at {}", config.database_url);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Running database migrations");
    sqlx::migrate!().run(&pool).await?;

    let state = AppState::new(pool, TokenKeys::from_secret(&config.jwt_secret));

    Ok(create_router(state))
}
