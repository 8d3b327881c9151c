use crate::errors::api::inventory::ErrorResponse;
use crate::errors::internal::{CredentialError, InternalError, InventoryError};
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Request body failed validation
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Invalid username or password
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Invalid or malformed JWT
    #[oai(status = 401)]
    InvalidToken(Json<ErrorResponse>),

    /// JWT has expired
    #[oai(status = 401)]
    ExpiredToken(Json<ErrorResponse>),

    /// Invalid refresh token
    #[oai(status = 401)]
    InvalidRefreshToken(Json<ErrorResponse>),

    /// Refresh token has expired
    #[oai(status = 401)]
    ExpiredRefreshToken(Json<ErrorResponse>),

    /// Account exists but is disabled
    #[oai(status = 403)]
    AccountDisabled(Json<ErrorResponse>),

    /// Caller lacks the required role
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// User referenced by the token no longer exists
    #[oai(status = 404)]
    UserNotFound(Json<ErrorResponse>),

    /// Username or email already taken
    #[oai(status = 409)]
    DuplicateUser(Json<ErrorResponse>),

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

impl AuthError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AuthError::BadRequest(body("bad_request", message, 400))
    }

    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(body(
            "invalid_credentials",
            "Credenciales inválidas",
            401,
        ))
    }

    /// Create an InvalidToken error
    pub fn invalid_token() -> Self {
        AuthError::InvalidToken(body("invalid_token", "Token inválido", 401))
    }

    /// Create an ExpiredToken error
    pub fn expired_token() -> Self {
        AuthError::ExpiredToken(body("expired_token", "Token expirado", 401))
    }

    /// Create an InvalidRefreshToken error
    pub fn invalid_refresh_token() -> Self {
        AuthError::InvalidRefreshToken(body(
            "invalid_refresh_token",
            "Refresh token inválido",
            401,
        ))
    }

    /// Create an ExpiredRefreshToken error
    pub fn expired_refresh_token() -> Self {
        AuthError::ExpiredRefreshToken(body(
            "expired_refresh_token",
            "Refresh token expirado",
            401,
        ))
    }

    pub fn account_disabled() -> Self {
        AuthError::AccountDisabled(body("account_disabled", "Usuario inactivo", 403))
    }

    pub fn forbidden() -> Self {
        AuthError::Forbidden(body("forbidden", "Permisos insuficientes", 403))
    }

    pub fn user_not_found() -> Self {
        AuthError::UserNotFound(body("user_not_found", "Usuario no encontrado", 404))
    }

    pub fn duplicate_user() -> Self {
        AuthError::DuplicateUser(body(
            "duplicate_user",
            "El nombre de usuario o email ya está registrado",
            409,
        ))
    }

    /// Convert InternalError to AuthError
    ///
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Database(_) => {
                tracing::error!("Database error in auth operation: {}", err);
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

            InternalError::Credential(CredentialError::InvalidCredentials) => {
                tracing::debug!("Invalid credentials attempt");
                Self::invalid_credentials()
            }
            InternalError::Credential(CredentialError::AccountDisabled(username)) => {
                tracing::debug!("Login attempt on disabled account: {}", username);
                Self::account_disabled()
            }
            InternalError::Credential(CredentialError::DuplicateUser(username)) => {
                tracing::warn!("Duplicate user attempt: {}", username);
                Self::duplicate_user()
            }
            InternalError::Credential(CredentialError::UserNotFound(user_id)) => {
                tracing::debug!("User not found: {}", user_id);
                Self::user_not_found()
            }
            InternalError::Credential(CredentialError::InsufficientRole { required }) => {
                tracing::debug!("Role {} required", required);
                Self::forbidden()
            }
            InternalError::Credential(CredentialError::InvalidToken { token_type, reason }) => {
                tracing::debug!("Invalid token: {} - {}", token_type, reason);
                if token_type == "refresh_token" {
                    Self::invalid_refresh_token()
                } else {
                    Self::invalid_token()
                }
            }
            InternalError::Credential(CredentialError::ExpiredToken(token_type)) => {
                tracing::debug!("Expired token: {}", token_type);
                if token_type == "refresh_token" {
                    Self::expired_refresh_token()
                } else {
                    Self::expired_token()
                }
            }
            InternalError::Inventory(InventoryError::Validation(message)) => {
                Self::bad_request(message.clone())
            }
            InternalError::Inventory(InventoryError::Duplicate(_)) => Self::duplicate_user(),

            _ => {
                tracing::error!("Unexpected error in auth operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    fn internal_server_error() -> Self {
        AuthError::InternalError(body("internal_error", "Error interno del servidor", 500))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::BadRequest(json)
            | AuthError::InvalidCredentials(json)
            | AuthError::InvalidToken(json)
            | AuthError::ExpiredToken(json)
            | AuthError::InvalidRefreshToken(json)
            | AuthError::ExpiredRefreshToken(json)
            | AuthError::AccountDisabled(json)
            | AuthError::Forbidden(json)
            | AuthError::UserNotFound(json)
            | AuthError::DuplicateUser(json)
            | AuthError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
