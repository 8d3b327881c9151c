use std::fmt;
use std::sync::Arc;

use crate::config::{EnvironmentProvider, SecretConfig, SecretType, SystemEnvironment};

/// Secret loading failures; messages never contain the secret value
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("Required secret '{secret_name}' is missing")]
    Missing { secret_name: String },

    #[error("Secret '{secret_name}' must be at least {expected} characters, got {actual}")]
    InvalidLength { secret_name: String, expected: usize, actual: usize },
}

impl SecretError {
    pub fn missing(secret_name: &str) -> Self {
        Self::Missing {
            secret_name: secret_name.to_string(),
        }
    }

    pub fn invalid_length(secret_name: &str, expected: usize, actual: usize) -> Self {
        Self::InvalidLength {
            secret_name: secret_name.to_string(),
            expected,
            actual,
        }
    }
}

/// Centralized manager for application secrets
pub struct SecretManager {
    jwt_secret: String,
    pepper: String,
    refresh_token_secret: String,
    admin_password: Option<String>,
}

impl SecretManager {
    /// Load and validate all secrets from the process environment
    ///
    /// # Errors
    /// Returns `SecretError` if any required secret is missing or fails validation
    pub fn init() -> Result<Self, SecretError> {
        Self::init_with_provider(Arc::new(SystemEnvironment))
    }

    /// Load and validate all secrets from the given provider
    pub fn init_with_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, SecretError> {
        let jwt_secret = Self::load_secret(env_provider.as_ref(), &Self::jwt_config())?;
        let pepper = Self::load_secret(env_provider.as_ref(), &Self::pepper_config())?;
        let refresh_token_secret =
            Self::load_secret(env_provider.as_ref(), &Self::refresh_token_config())?;
        let admin_password = Self::load_secret(env_provider.as_ref(), &Self::admin_password_config())?;

        Ok(Self {
            jwt_secret,
            pepper,
            refresh_token_secret,
            admin_password: Some(admin_password).filter(|p| !p.is_empty()),
        })
    }

    fn jwt_config() -> SecretConfig {
        SecretConfig::env_var("JWT_SECRET").required(true).min_length(32)
    }

    fn pepper_config() -> SecretConfig {
        SecretConfig::env_var("PEPPER").required(true).min_length(16)
    }

    fn refresh_token_config() -> SecretConfig {
        SecretConfig::env_var("REFRESH_TOKEN_SECRET")
            .required(true)
            .min_length(32)
    }

    /// Optional; seeding and create-admin generate a password when unset
    fn admin_password_config() -> SecretConfig {
        SecretConfig::env_var("ADMIN_PASSWORD").required(false)
    }

    /// Get the JWT signing secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// Get the pepper for password hashing
    pub fn pepper(&self) -> &str {
        &self.pepper
    }

    /// Get the HMAC key for refresh token hashes
    pub fn refresh_token_secret(&self) -> &str {
        &self.refresh_token_secret
    }

    /// Password for the bootstrap admin, when `ADMIN_PASSWORD` is set
    pub fn admin_password(&self) -> Option<&str> {
        self.admin_password.as_deref()
    }

    /// Load a secret based on its configuration
    pub(crate) fn load_secret(
        env_provider: &(dyn EnvironmentProvider + Send + Sync),
        config: &SecretConfig,
    ) -> Result<String, SecretError> {
        let value = match &config.secret_type {
            SecretType::EnvVar { name } => match env_provider.get_var(name) {
                Some(v) => v,
                None if !config.required => return Ok(String::new()),
                None => return Err(SecretError::missing(name)),
            },
        };

        if let Some(min_len) = config.min_length {
            if value.len() < min_len {
                return Err(SecretError::invalid_length(
                    config.secret_type.name(),
                    min_len,
                    value.len(),
                ));
            }
        }

        Ok(value)
    }
}

impl fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretManager")
            .field("jwt_secret", &"<redacted>")
            .field("pepper", &"<redacted>")
            .field("refresh_token_secret", &"<redacted>")
            .field("admin_password", &self.admin_password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl fmt::Display for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loaded = 3 + usize::from(self.admin_password.is_some());
        write!(f, "SecretManager {{ secrets_loaded: {} }}", loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    const JWT: &str = "this-is-a-valid-jwt-secret-with-32-characters";
    const PEPPER: &str = "valid-pepper-16ch";
    const REFRESH: &str = "refresh-secret-that-is-32-characters-long";

    fn full_env() -> MockEnvironment {
        MockEnvironment::empty().with_vars(&[
            ("JWT_SECRET", JWT),
            ("PEPPER", PEPPER),
            ("REFRESH_TOKEN_SECRET", REFRESH),
        ])
    }

    #[test]
    fn test_successful_initialization_with_valid_secrets() {
        let manager = SecretManager::init_with_provider(Arc::new(full_env())).unwrap();

        assert_eq!(manager.jwt_secret(), JWT);
        assert_eq!(manager.pepper(), PEPPER);
        assert_eq!(manager.refresh_token_secret(), REFRESH);
    }

    #[test]
    fn test_missing_jwt_secret_fails() {
        let env = MockEnvironment::empty()
            .with_var("PEPPER", PEPPER)
            .with_var("REFRESH_TOKEN_SECRET", REFRESH);

        match SecretManager::init_with_provider(Arc::new(env)) {
            Err(SecretError::Missing { secret_name }) => assert_eq!(secret_name, "JWT_SECRET"),
            other => panic!("Expected Missing error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_short_pepper_fails() {
        let env = full_env().with_var("PEPPER", "short");

        match SecretManager::init_with_provider(Arc::new(env)) {
            Err(SecretError::InvalidLength { secret_name, expected, actual }) => {
                assert_eq!(secret_name, "PEPPER");
                assert_eq!(expected, 16);
                assert_eq!(actual, 5);
            }
            other => panic!("Expected InvalidLength error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_refresh_secret_fails() {
        let env = MockEnvironment::empty()
            .with_var("JWT_SECRET", JWT)
            .with_var("PEPPER", PEPPER);

        assert!(SecretManager::init_with_provider(Arc::new(env)).is_err());
    }

    #[test]
    fn test_debug_and_display_do_not_expose_secrets() {
        let manager = SecretManager::init_with_provider(Arc::new(full_env())).unwrap();

        let debug_output = format!("{:?}", manager);
        assert!(!debug_output.contains(JWT));
        assert!(!debug_output.contains(PEPPER));
        assert_eq!(debug_output.matches("<redacted>").count(), 3);

        let display_output = format!("{}", manager);
        assert!(!display_output.contains(REFRESH));
    }

    #[test]
    fn test_admin_password_is_optional() {
        let manager = SecretManager::init_with_provider(Arc::new(full_env())).unwrap();
        assert_eq!(manager.admin_password(), None);

        let blank = full_env().with_var("ADMIN_PASSWORD", "");
        let manager = SecretManager::init_with_provider(Arc::new(blank)).unwrap();
        assert_eq!(manager.admin_password(), None);

        let set = full_env().with_var("ADMIN_PASSWORD", "clave-admin-1");
        let manager = SecretManager::init_with_provider(Arc::new(set)).unwrap();
        assert_eq!(manager.admin_password(), Some("clave-admin-1"));
        assert!(!format!("{:?}", manager).contains("clave-admin-1"));
        assert_eq!(format!("{}", manager), "SecretManager { secrets_loaded: 4 }");
    }
}
