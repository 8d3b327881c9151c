use std::fmt;
use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;

/// Bootstrap settings for infrastructure configuration
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    frontend_url: String,
    app_env: String,
    db_max_connections: u32,
    db_timeout_seconds: u64,
    jwt_expiration_minutes: i64,
    refresh_expiration_days: i64,
}

impl BootstrapSettings {
    /// Load bootstrap settings from the given environment provider using ConfigSpec
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let database_url = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://inventario.db?mode=rwc")
            .min_length(1)
            .validator(ConfigSpec::validate_database_url)
            .load_setting_with_source()?
            .value;

        let server_host = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address)
            .load_setting_with_source()?
            .value;

        let port_value = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .env_override("APP_PORT")
            .default_value("8080")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535))
            .load_setting_with_source()?
            .value;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        let frontend_url = ConfigSpec::new(env_provider.clone())
            .env_override("FRONTEND_URL")
            .default_value("http://localhost:5173")
            .validator(ConfigSpec::validate_http_origin)
            .load_setting_with_source()?
            .value;

        let app_env = ConfigSpec::new(env_provider.clone())
            .env_override("APP_ENV")
            .default_value("development")
            .min_length(1)
            .load_setting_with_source()?
            .value;

        let max_connections = ConfigSpec::new(env_provider.clone())
            .env_override("DB_MAX_CONNECTIONS")
            .default_value("10")
            .validator(|value| ConfigSpec::validate_integer_range(value, 1, 1000))
            .load_setting_with_source()?
            .value;
        let db_max_connections =
            ConfigSpec::parse_positive(&max_connections, "DB_MAX_CONNECTIONS")? as u32;

        let timeout = ConfigSpec::new(env_provider.clone())
            .env_override("DB_TIMEOUT_SECONDS")
            .default_value("30")
            .load_setting_with_source()?
            .value;
        let db_timeout_seconds = ConfigSpec::parse_positive(&timeout, "DB_TIMEOUT_SECONDS")?;

        let jwt_minutes = ConfigSpec::new(env_provider.clone())
            .env_override("JWT_EXPIRATION_MINUTES")
            .default_value("1440")
            .load_setting_with_source()?
            .value;
        let jwt_expiration_minutes =
            ConfigSpec::parse_positive(&jwt_minutes, "JWT_EXPIRATION_MINUTES")? as i64;

        let refresh_days = ConfigSpec::new(env_provider)
            .env_override("REFRESH_EXPIRATION_DAYS")
            .default_value("7")
            .load_setting_with_source()?
            .value;
        let refresh_expiration_days =
            ConfigSpec::parse_positive(&refresh_days, "REFRESH_EXPIRATION_DAYS")? as i64;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            frontend_url,
            app_env,
            db_max_connections,
            db_timeout_seconds,
            jwt_expiration_minutes,
            refresh_expiration_days,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn frontend_url(&self) -> &str {
        &self.frontend_url
    }

    pub fn app_env(&self) -> &str {
        &self.app_env
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.db_timeout_seconds
    }

    pub fn jwt_expiration_minutes(&self) -> i64 {
        self.jwt_expiration_minutes
    }

    pub fn refresh_expiration_days(&self) -> i64 {
        self.refresh_expiration_days
    }

    /// Origins accepted by the CORS middleware, without duplicates
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec![self.frontend_url.clone()];
        for origin in ["http://localhost:5173", "http://localhost:3000"] {
            if !origins.iter().any(|o| o == origin) {
                origins.push(origin.to_string());
            }
        }
        origins
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("frontend_url", &self.frontend_url)
            .field("app_env", &self.app_env)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_timeout_seconds", &self.db_timeout_seconds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;
    use std::collections::HashMap;

    fn create_test_env(vars: HashMap<String, String>) -> Arc<MockEnvironment> {
        Arc::new(MockEnvironment::new(vars))
    }

    #[test]
    fn test_bootstrap_settings_with_all_vars() {
        let env_vars = HashMap::from([
            ("DATABASE_URL".to_string(), "sqlite://test.db".to_string()),
            ("HOST".to_string(), "127.0.0.1".to_string()),
            ("PORT".to_string(), "9000".to_string()),
            ("FRONTEND_URL".to_string(), "https://inventario.example".to_string()),
            ("APP_ENV".to_string(), "production".to_string()),
            ("DB_MAX_CONNECTIONS".to_string(), "25".to_string()),
            ("JWT_EXPIRATION_MINUTES".to_string(), "60".to_string()),
        ]);

        let settings = BootstrapSettings::from_env_provider(create_test_env(env_vars)).unwrap();

        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.server_address(), "127.0.0.1:9000");
        assert_eq!(settings.frontend_url(), "https://inventario.example");
        assert!(settings.is_production());
        assert_eq!(settings.db_max_connections(), 25);
        assert_eq!(settings.jwt_expiration_minutes(), 60);
    }

    #[test]
    fn test_bootstrap_settings_with_defaults() {
        let settings =
            BootstrapSettings::from_env_provider(create_test_env(HashMap::new())).unwrap();

        assert_eq!(settings.database_url(), "sqlite://inventario.db?mode=rwc");
        assert_eq!(settings.server_address(), "0.0.0.0:8080");
        assert_eq!(settings.frontend_url(), "http://localhost:5173");
        assert_eq!(settings.app_env(), "development");
        assert_eq!(settings.db_max_connections(), 10);
        assert_eq!(settings.db_timeout_seconds(), 30);
        assert_eq!(settings.jwt_expiration_minutes(), 1440);
        assert_eq!(settings.refresh_expiration_days(), 7);
    }

    #[test]
    fn test_app_port_is_used_when_port_is_missing() {
        let env_vars = HashMap::from([("APP_PORT".to_string(), "3001".to_string())]);
        let settings = BootstrapSettings::from_env_provider(create_test_env(env_vars)).unwrap();

        assert_eq!(settings.server_port(), 3001);
    }

    #[test]
    fn test_invalid_port_fails() {
        let env_vars = HashMap::from([("PORT".to_string(), "not-a-port".to_string())]);
        assert!(BootstrapSettings::from_env_provider(create_test_env(env_vars)).is_err());
    }

    #[test]
    fn test_empty_database_url_fails_validation() {
        let env_vars = HashMap::from([("DATABASE_URL".to_string(), "".to_string())]);
        let result = BootstrapSettings::from_env_provider(create_test_env(env_vars));

        match result {
            Err(ApplicationError::InvalidSetting { setting_name, reason }) => {
                assert_eq!(setting_name, "DATABASE_URL");
                assert!(reason.contains("at least 1 characters"));
            }
            other => panic!("Expected InvalidSetting for DATABASE_URL, got: {:?}", other),
        }
    }

    #[test]
    fn test_allowed_origins_deduplicates_frontend() {
        let settings =
            BootstrapSettings::from_env_provider(create_test_env(HashMap::new())).unwrap();

        assert_eq!(
            settings.allowed_origins(),
            vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string()
            ]
        );
    }
}
