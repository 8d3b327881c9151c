use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::catalog::Rol;
use crate::types::db::usuario;
use crate::types::dto::common::format_timestamp;

/// Request model for user login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username for authentication
    pub username: String,

    /// Password for authentication
    pub password: String,
}

/// Public view of a system user, never carries the password hash
#[derive(Object, Debug, Clone)]
pub struct UsuarioResponse {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub username: String,
    pub rol: Rol,
    pub activo: bool,
    pub cedula: Option<String>,
    /// Last successful login (ISO 8601)
    pub ultimo_login: Option<String>,
    pub created_at: String,
}

impl From<usuario::Model> for UsuarioResponse {
    fn from(model: usuario::Model) -> Self {
        Self {
            id: model.id,
            nombre: model.nombre,
            apellido: model.apellido,
            email: model.email,
            username: model.username,
            rol: model.rol,
            activo: model.activo,
            cedula: model.cedula,
            ultimo_login: model.ultimo_login.map(format_timestamp),
            created_at: format_timestamp(model.created_at),
        }
    }
}

/// Response model containing authentication tokens
#[derive(Object, Debug)]
pub struct LoginResponse {
    /// JWT access token for API authentication
    pub token: String,

    /// Refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Token type (always "Bearer")
    pub token_type: String,

    /// Access token expiration (Unix timestamp)
    pub expires_at: i64,

    /// The authenticated user
    pub usuario: UsuarioResponse,
}

/// Request model for token refresh
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token to exchange for a new access token
    pub refresh_token: String,
}

/// Response model for token refresh
#[derive(Object, Debug)]
pub struct RefreshResponse {
    /// New JWT access token for API authentication
    pub token: String,

    /// Token type (always "Bearer")
    pub token_type: String,

    /// Access token expiration (Unix timestamp)
    pub expires_at: i64,
}

/// Request model for registering a system user
#[derive(Object, Debug, Clone)]
pub struct RegisterRequest {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub username: String,

    /// At least 6 characters
    pub password: String,

    /// Defaults to usuario
    pub rol: Option<Rol>,

    pub cedula: Option<String>,
}

/// Request model for logout
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// Refresh token to revoke
    pub refresh_token: String,
}
