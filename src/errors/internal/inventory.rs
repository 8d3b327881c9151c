use thiserror::Error;

/// Domain failures raised by the inventory services
#[derive(Error, Debug)]
pub enum InventoryError {
    /// The addressed record does not exist
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// Lookup by a non-id key found nothing
    #[error("{0}")]
    NotFoundBy(String),

    /// Input failed field validation
    #[error("{0}")]
    Validation(String),

    /// A referenced record (foreign key) does not exist
    #[error("{0}")]
    InvalidReference(String),

    /// A unique field already holds this value
    #[error("{0}")]
    Duplicate(String),

    /// The operation conflicts with dependent records
    #[error("{0}")]
    Conflict(String),
}

impl InventoryError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::Duplicate(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn invalid_reference(message: impl Into<String>) -> Self {
        Self::InvalidReference(message.into())
    }
}
