use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use super::MySqlConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Connect with hand-built SeaORM options
pub async fn connect_with_options(options: ConnectOptions) -> DatabaseResult<DatabaseConnection> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to MySQL database");
    Ok(db)
}

/// Connect from config, retrying with exponential backoff while the server comes up.
///
/// Configuration errors are reported immediately; only connection attempts are retried.
///
/// # Example
/// ```ignore
/// use database::common::RetryConfig;
/// use database::mysql::{MySqlConfig, connect_from_config_with_retry};
///
/// let config = MySqlConfig::from_env()?;
/// let db = connect_from_config_with_retry(config, Some(RetryConfig::new().with_max_retries(10))).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: MySqlConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    config.validate()?;
    info!(url = %config.redacted_url(), "Connecting to MySQL (with retry)");

    let options = config.into_connect_options();
    let retry_config = retry_config.unwrap_or_default();
    let attempts = retry_config.max_retries + 1;

    retry_with_backoff(|| connect_with_options(options.clone()), retry_config)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(format!("{} attempts: {}", attempts, e)))
}
