use std::fmt;

use thiserror::Error;

/// Point of a transaction where the database gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStage {
    Begin,
    Commit,
}

impl fmt::Display for TxStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxStage::Begin => write!(f, "begin"),
            TxStage::Commit => write!(f, "commit"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    /// A single query or statement failed; `operation` names the store call
    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Transaction {stage} failed: {source}")]
    Transaction {
        stage: TxStage,
        #[source]
        source: sea_orm::DbErr,
    },
}
