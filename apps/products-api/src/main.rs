//! Products API - REST server over PostgreSQL or an in-memory store

use axum_helpers::server::{close_postgres, create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = match config.database.clone() {
        Some(database) => {
            info!("Connecting to PostgreSQL");
            let db = database::postgres::connect_from_config_with_retry(database, None)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

            if config.run_migrations {
                database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
                    .await
                    .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;
            }
            Some(db)
        }
        None => None,
    };

    let state = AppState { config, db };
    let app = api::app(&state)?;

    info!(
        "Starting Products API on port {} ({}s shutdown timeout)",
        state.config.server.port,
        state.config.server.shutdown_timeout.as_secs()
    );

    create_production_app(
        app,
        &state.config.server,
        state.config.server.shutdown_timeout,
        async move {
            if let Some(db) = state.db {
                close_postgres(db, "products").await;
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
