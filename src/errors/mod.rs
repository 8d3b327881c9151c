// Errors layer - Error type definitions
pub mod api;
pub mod internal;

// Re-exports for convenience
pub use api::{ApiError, AuthError, ErrorResponse};
pub use internal::{CredentialError, DatabaseError, InternalError, InventoryError};

#[cfg(test)]
mod internal_test;
