use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::BootstrapSettings;
use crate::errors::InternalError;

/// Open the main database connection pool
///
/// Does NOT run migrations - call [`migrate_database`] separately.
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Connection established successfully
/// * `Err(InternalError)` - Connection failed
pub async fn connect_database(
    settings: &BootstrapSettings,
) -> Result<DatabaseConnection, InternalError> {
    let mut options = ConnectOptions::new(settings.database_url().to_string());
    options
        .max_connections(settings.db_max_connections())
        .connect_timeout(Duration::from_secs(settings.db_timeout_seconds()))
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to database: {}", settings.database_url());

    Ok(db)
}

/// Run all pending migrations
///
/// # Arguments
/// * `db` - Database connection to run migrations on
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
