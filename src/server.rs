//! HTTP server initialization and runtime setup.
//!
//! Handles database connection pooling, migrations, service wiring, and the
//! Axum server lifecycle.

use crate::application::services::{CreationService, RedirectEngine, UniquenessResolver};
use crate::config::Config;
use crate::infrastructure::persistence::PgRecordStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::{CodeGenerator, OsRandom};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Embedded migrations
/// - Record store and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migrations, or the server
/// bind/runtime fail.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let store = Arc::new(PgRecordStore::new(Arc::new(pool)));

    let generator = CodeGenerator::new(Arc::new(OsRandom), config.code_length);
    let resolver = UniquenessResolver::new(config.max_code_attempts);

    let state = AppState {
        creation_service: Arc::new(CreationService::new(
            store.clone(),
            generator,
            resolver,
        )),
        redirect_engine: Arc::new(RedirectEngine::new(store.clone())),
        store,
        base_url: config.base_url,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
