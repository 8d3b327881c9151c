use serde::{Deserialize, Serialize};

use crate::types::catalog::Rol;

/// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (usuario id)
    pub sub: String,

    /// Login name at issue time
    pub username: String,

    /// Role at issue time (admin, usuario, tecnico)
    pub rol: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Numeric id of the authenticated usuario, if `sub` is well formed
    pub fn usuario_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }

    pub fn is_admin(&self) -> bool {
        self.rol == crate::types::catalog::label(&Rol::Admin)
    }
}
