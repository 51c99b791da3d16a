//! Application state management

use database::postgres::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Pool when PostgreSQL is configured
    pub db: Option<DatabaseConnection>,
}
