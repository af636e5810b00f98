//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction.

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, clones share the pool
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
