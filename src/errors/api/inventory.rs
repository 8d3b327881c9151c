use crate::errors::internal::{CredentialError, DatabaseError, InternalError, InventoryError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error body returned by every endpoint
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Error responses for inventory endpoints
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Malformed id, failed validation or broken reference
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Missing, invalid or expired access token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Authenticated but not allowed
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Addressed record does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Unique value already taken
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn body(error: &str, message: impl Into<String>, status_code: u16) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code,
    })
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(body("bad_request", message, 400))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(body("unauthorized", message, 401))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(body("forbidden", message, 403))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(body("not_found", message, 404))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(body("conflict", message, 409))
    }

    /// Generic 500 that never exposes internal details
    pub fn internal_server_error() -> Self {
        ApiError::InternalError(body("internal_error", "Error interno del servidor", 500))
    }

    /// Convert InternalError to ApiError
    ///
    /// Infrastructure failures are logged and collapsed into a generic 500.
    /// Domain failures keep their message, which is safe to show to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Database(DatabaseError::Operation { operation, .. }) => {
                tracing::error!("Database error in {}: {}", operation, err);
                Self::internal_server_error()
            }
            InternalError::Database(DatabaseError::Transaction { stage, .. }) => {
                tracing::error!("Transaction {} error: {}", stage, err);
                Self::internal_server_error()
            }
            InternalError::Parse { value_type, .. } => {
                tracing::error!("Parse error for {}: {}", value_type, err);
                Self::internal_server_error()
            }
            InternalError::Crypto { operation, .. } => {
                tracing::error!("Crypto error in {}: {}", operation, err);
                Self::internal_server_error()
            }
            InternalError::Render { document, .. } => {
                tracing::error!("Render error for {}: {}", document, err);
                Self::internal_server_error()
            }

            InternalError::Inventory(InventoryError::NotFound { entity, id }) => {
                tracing::debug!("{} {} not found", entity, id);
                Self::not_found(format!("{} no encontrado", entity))
            }
            InternalError::Inventory(InventoryError::NotFoundBy(message)) => {
                Self::not_found(message.clone())
            }
            InternalError::Inventory(InventoryError::Validation(message)) => {
                tracing::debug!("Validation failed: {}", message);
                Self::bad_request(message.clone())
            }
            InternalError::Inventory(InventoryError::InvalidReference(message)) => {
                tracing::debug!("Invalid reference: {}", message);
                Self::bad_request(message.clone())
            }
            InternalError::Inventory(InventoryError::Duplicate(message)) => {
                tracing::warn!("Duplicate value: {}", message);
                Self::conflict(message.clone())
            }
            InternalError::Inventory(InventoryError::Conflict(message)) => {
                tracing::warn!("Conflict: {}", message);
                Self::conflict(message.clone())
            }

            InternalError::Credential(CredentialError::InvalidToken { .. })
            | InternalError::Credential(CredentialError::ExpiredToken(_))
            | InternalError::Credential(CredentialError::InvalidCredentials) => {
                tracing::debug!("Rejected token: {}", err);
                Self::unauthorized("Token inválido o expirado")
            }
            InternalError::Credential(CredentialError::InsufficientRole { required }) => {
                tracing::debug!("Role {} required", required);
                Self::forbidden("Permisos insuficientes")
            }
            InternalError::Credential(CredentialError::AccountDisabled(_)) => {
                Self::forbidden("Usuario inactivo")
            }
            InternalError::Credential(CredentialError::DuplicateUser(_)) => {
                Self::conflict("El usuario ya existe")
            }
            InternalError::Credential(CredentialError::UserNotFound(_)) => {
                Self::not_found("Usuario no encontrado")
            }
            InternalError::Credential(CredentialError::PasswordHashingFailed(_)) => {
                tracing::error!("Password hashing failed: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.body().message.clone()
    }

    pub fn status_code(&self) -> u16 {
        self.body().status_code
    }

    fn body(&self) -> &ErrorResponse {
        match self {
            ApiError::BadRequest(json)
            | ApiError::Unauthorized(json)
            | ApiError::Forbidden(json)
            | ApiError::NotFound(json)
            | ApiError::Conflict(json)
            | ApiError::InternalError(json) => &json.0,
        }
    }
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
