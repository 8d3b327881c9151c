use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub mod credential;
pub mod database;
pub mod inventory;

pub use credential::CredentialError;
pub use database::{DatabaseError, TxStage};
pub use inventory::InventoryError;

/// Internal error type for store and service operations
///
/// Hybrid design separates infrastructure errors (shared) from domain errors.
/// Not exposed via API - endpoints must convert to ApiError or AuthError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error("Crypto error: {operation} failed: {message}")]
    Crypto {
        operation: String,
        message: String,
    },

    #[error("Render error: {document} failed: {message}")]
    Render {
        document: String,
        message: String,
    },

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl InternalError {
    pub fn database(operation: &str, source: DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    /// Map a failed insert/update, turning constraint violations into domain errors
    ///
    /// Unique violations become `Duplicate` and foreign key violations become
    /// `InvalidReference`; anything else stays a database error.
    pub fn from_write(operation: &str, source: DbErr) -> InternalError {
        match source.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!("Unique constraint violated in {}: {}", operation, detail);
                InventoryError::duplicate("Ya existe un registro con ese valor único").into()
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::debug!("Foreign key violated in {}: {}", operation, detail);
                InventoryError::invalid_reference("El registro relacionado no existe").into()
            }
            _ => Self::database(operation, source),
        }
    }

    pub fn transaction_begin(source: DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Transaction {
            stage: TxStage::Begin,
            source,
        })
    }

    pub fn transaction_commit(source: DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Transaction {
            stage: TxStage::Commit,
            source,
        })
    }

    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    pub fn crypto(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Crypto {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn render(document: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            document: document.into(),
            message: message.into(),
        }
    }
}
