//! Products API routes

use axum::Router;
use domain_products::{InMemoryProductRepository, PgProductRepository, ProductService, handlers};
use tracing::warn;

use crate::state::AppState;

/// Create products router over PostgreSQL, or over process memory when no
/// database is configured.
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => {
            let repository = PgProductRepository::new(db.clone());
            handlers::router(ProductService::new(repository))
        }
        None => {
            warn!("DATABASE_URL not set, products are kept in memory and lost on restart");
            handlers::router(ProductService::new(InMemoryProductRepository::new()))
        }
    }
}
