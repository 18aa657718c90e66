//! Check command - Verifies database connectivity.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the check command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!(?config, "Checking database connectivity...");

    let db = Database::connect(&config).await?;
    db.ping().await?;

    tracing::info!("Database is reachable");
    Ok(())
}
