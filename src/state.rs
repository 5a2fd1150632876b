use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;

/// Handles shared by every request. The connection pool is passed explicitly
/// to each repository call.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
