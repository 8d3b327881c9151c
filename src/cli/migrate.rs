use crate::config::{BootstrapSettings, connect_database, migrate_database};
use crate::errors::InternalError;

/// Connect and apply every pending migration without building AppData
pub async fn run_migrations(settings: &BootstrapSettings) -> Result<(), InternalError> {
    tracing::info!("Running database migrations...");

    let db = connect_database(settings).await?;
    migrate_database(&db).await?;

    tracing::info!("All migrations completed successfully");
    Ok(())
}
