//! MySQL connection pool and helpers

mod config;
mod connector;
mod health;

pub use config::MySqlConfig;
pub use connector::{connect_from_config_with_retry, connect_with_options};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
