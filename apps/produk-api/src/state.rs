//! Application state management

use sea_orm::DatabaseConnection;

/// Shared application state
///
/// `db` is the process-wide pool; cloning the state clones the handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
