// src/main.rs

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use moviehub::application::api;
use moviehub::application::state::AppState;
use moviehub::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
};
use moviehub::repositories::{MovieRepository, SqliteMovieRepository};
use moviehub::services::MovieService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. LOGGING
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. INFRASTRUCTURE
    let pool = Arc::new(create_connection_pool()?);

    // Initialize schema (idempotent) and check the file is sane
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;
    }

    // 3. REPOSITORIES
    let movie_repo: Arc<dyn MovieRepository> = Arc::new(SqliteMovieRepository::new(pool.clone()));

    // 4. SERVICES
    let movie_service = Arc::new(MovieService::new(movie_repo));

    // 5. APPLICATION STATE
    let app_state = AppState { movie_service };

    // 6. HTTP SERVER
    let addr = std::env::var("MOVIEHUB_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    info!("MovieHub listening on {}", addr);
    api::serve(app_state, &addr).await?;

    Ok(())
}
