// API-facing error types
pub mod auth;
pub mod inventory;

// Re-exports for convenience
pub use auth::AuthError;
pub use inventory::{ApiError, ErrorResponse};

#[cfg(test)]
mod auth_test;
#[cfg(test)]
mod inventory_test;
