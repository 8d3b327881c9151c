use std::fmt;

use base64::{Engine as _, engine::general_purpose};
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::prelude::*;

use crate::errors::{CredentialError, InternalError};
use crate::services::crypto;
use crate::types::catalog;
use crate::types::db::usuario;
use crate::types::internal::auth::Claims;

/// Issues and checks access tokens and refresh tokens
pub struct TokenService {
    jwt_secret: String,
    jwt_expiration_minutes: i64,
    refresh_expiration_days: i64,
    refresh_token_secret: String,
}

impl TokenService {
    pub fn new(
        jwt_secret: String,
        refresh_token_secret: String,
        jwt_expiration_minutes: i64,
        refresh_expiration_days: i64,
    ) -> Self {
        Self {
            jwt_secret,
            jwt_expiration_minutes,
            refresh_expiration_days,
            refresh_token_secret,
        }
    }

    /// Sign an HS256 access token for `usuario`
    ///
    /// Returns the token and its expiration as a unix timestamp.
    pub fn generate_jwt(&self, usuario: &usuario::Model) -> Result<(String, i64), InternalError> {
        let now = Utc::now().timestamp();
        let expiration = now + self.jwt_expiration_minutes * 60;

        let claims = Claims {
            sub: usuario.id.to_string(),
            username: usuario.username.clone(),
            rol: catalog::label(&usuario.rol),
            exp: expiration,
            iat: now,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| InternalError::crypto("jwt_encode", e.to_string()))?;

        Ok((token, expiration))
    }

    pub fn validate_jwt(&self, token: &str) -> Result<Claims, InternalError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => CredentialError::ExpiredToken("access_token".to_string()),
            _ => CredentialError::invalid_token("access_token", e.to_string()),
        })?;

        Ok(token_data.claims)
    }

    /// 32 random bytes, base64 encoded
    pub fn generate_refresh_token(&self) -> String {
        let mut rng = rand::rng();
        let random_bytes: [u8; 32] = rng.random();
        general_purpose::STANDARD.encode(random_bytes)
    }

    /// Refresh tokens are stored only as this hash
    pub fn hash_refresh_token(&self, token: &str) -> Result<String, InternalError> {
        crypto::hmac_sha256_token(&self.refresh_token_secret, token)
    }

    pub fn get_refresh_expiration(&self) -> i64 {
        Utc::now().timestamp() + self.refresh_expiration_days * 24 * 60 * 60
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .field("refresh_expiration_days", &self.refresh_expiration_days)
            .field("refresh_token_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::catalog::Rol;

    const JWT_SECRET: &str = "test-secret-key-minimum-32-characters-long";
    const REFRESH_SECRET: &str = "test-refresh-secret-minimum-32-chars";

    fn service() -> TokenService {
        TokenService::new(JWT_SECRET.to_string(), REFRESH_SECRET.to_string(), 1440, 7)
    }

    fn usuario() -> usuario::Model {
        usuario::Model {
            id: 42,
            nombre: "Luisa".to_string(),
            apellido: "Angulo".to_string(),
            email: "luisa@tumaco.gov.co".to_string(),
            username: "langulo".to_string(),
            password_hash: String::new(),
            rol: Rol::Tecnico,
            activo: true,
            cedula: None,
            ultimo_login: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_jwt_round_trip_carries_claims() {
        let service = service();
        let (token, expires_at) = service.generate_jwt(&usuario()).unwrap();

        let claims = service.validate_jwt(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.usuario_id(), Some(42));
        assert_eq!(claims.username, "langulo");
        assert_eq!(claims.rol, "tecnico");
        assert_eq!(claims.exp, expires_at);
        assert_eq!(claims.exp - claims.iat, 1440 * 60);
    }

    #[test]
    fn test_validate_jwt_fails_with_other_secret() {
        let (token, _) = service().generate_jwt(&usuario()).unwrap();
        let other = TokenService::new(
            "wrong-secret-key-minimum-32-characters".to_string(),
            REFRESH_SECRET.to_string(),
            1440,
            7,
        );

        match other.validate_jwt(&token) {
            Err(InternalError::Credential(CredentialError::InvalidToken { token_type, .. })) => {
                assert_eq!(token_type, "access_token");
            }
            other => panic!("Expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_jwt_fails_with_expired_token() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "1".to_string(),
            username: "admin".to_string(),
            rol: "admin".to_string(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            service().validate_jwt(&token),
            Err(InternalError::Credential(CredentialError::ExpiredToken(_)))
        ));
    }

    #[test]
    fn test_refresh_tokens_are_unique_base64() {
        let service = service();
        let first = service.generate_refresh_token();
        let second = service.generate_refresh_token();

        assert_ne!(first, second);
        assert_eq!(first.len(), 44);
    }

    #[test]
    fn test_refresh_hash_is_keyed() {
        let other = TokenService::new(
            JWT_SECRET.to_string(),
            "another-refresh-secret-minimum-32-ch".to_string(),
            1440,
            7,
        );
        let hash = service().hash_refresh_token("token").unwrap();

        assert_eq!(hash, service().hash_refresh_token("token").unwrap());
        assert_ne!(hash, other.hash_refresh_token("token").unwrap());
    }

    #[test]
    fn test_refresh_expiration_uses_configured_days() {
        let expires = service().get_refresh_expiration();
        let expected = Utc::now().timestamp() + 7 * 24 * 3600;
        assert!((expires - expected).abs() <= 2);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let output = format!("{:?}", service());
        assert!(!output.contains(JWT_SECRET));
        assert!(!output.contains(REFRESH_SECRET));
        assert_eq!(output.matches("<redacted>").count(), 2);
    }
}
