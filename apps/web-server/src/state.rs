//! Application state - shared across all handlers.

use std::sync::Arc;

use sea_orm::{DbConn, DbErr};

use quill_core::ports::{PostRepository, UserRepository};
use quill_infra::database::{DatabaseConfig, PostgresPostRepository, PostgresUserRepository, connect};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Connect to the database and build the repositories over the pool.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = connect(config).await?;

        tracing::info!("Application state initialized");

        Ok(Self::with_connection(db))
    }

    /// Build the state over an existing connection. Tests use this with a
    /// mock connection.
    pub fn with_connection(db: DbConn) -> Self {
        Self {
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            users: Arc::new(PostgresUserRepository::new(db)),
        }
    }
}
