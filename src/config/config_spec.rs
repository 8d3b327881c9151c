use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::errors::ApplicationError;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

/// Configuration specification with environment override → default priority
///
/// Several environment names may be registered; the first one that is set wins.
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    pub env_overrides: Vec<String>,
    pub default_value: Option<String>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_overrides: Vec::new(),
            default_value: None,
            required: false,
            min_length: None,
            max_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_overrides.push(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Name used in error messages: the first registered variable
    fn setting_name(&self) -> &str {
        self.env_overrides
            .first()
            .map(String::as_str)
            .unwrap_or("unknown_setting")
    }

    /// Load a setting value with source tracking according to priority rules
    ///
    /// Environment variables (in registration order) win over the default.
    /// A value from either source is validated before it is returned.
    pub fn load_setting_with_source(&self) -> Result<ConfigValue, ApplicationError> {
        let names: Vec<&str> = self.env_overrides.iter().map(String::as_str).collect();
        if let Some((name, value)) = self.env_provider.get_first(&names) {
            self.validate_value(&value, &name)?;
            return Ok(ConfigValue {
                value,
                source: ConfigValueSource::EnvironmentVariable { name },
            });
        }

        if let Some(default) = &self.default_value {
            self.validate_value(default, self.setting_name())?;
            return Ok(ConfigValue {
                value: default.clone(),
                source: ConfigValueSource::Default,
            });
        }

        if self.required {
            return Err(ApplicationError::InvalidSetting {
                setting_name: self.setting_name().to_string(),
                reason: "Required setting has no value from any source".to_string(),
            });
        }

        Ok(ConfigValue {
            value: String::new(),
            source: ConfigValueSource::Default,
        })
    }

    /// Validate a setting value according to the ConfigSpec rules
    pub fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), ApplicationError> {
        if let Some(min_len) = self.min_length {
            if value.len() < min_len {
                return Err(ApplicationError::InvalidSetting {
                    setting_name: setting_name.to_string(),
                    reason: format!("Value must be at least {} characters long", min_len),
                });
            }
        }

        if let Some(max_len) = self.max_length {
            if value.len() > max_len {
                return Err(ApplicationError::InvalidSetting {
                    setting_name: setting_name.to_string(),
                    reason: format!("Value must be at most {} characters long", max_len),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason,
            })?;
        }

        Ok(())
    }
}

/// Type parsing utilities for configuration values
impl ConfigSpec {
    /// Parse a port number from string with validation
    ///
    /// # Arguments
    /// * `value` - String value to parse
    /// * `setting_name` - Name of the setting for error messages
    ///
    /// # Returns
    /// * `Ok(u16)` - Parsed port number
    /// * `Err(ApplicationError)` - Parse error or validation error
    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        let port = value
            .trim()
            .parse::<u16>()
            .map_err(|e| ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!("Expected port number (1-65535), got '{}': {}", value, e),
            })?;

        if port == 0 {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Port number must be between 1 and 65535".to_string(),
            });
        }

        Ok(port)
    }

    /// Parse a positive integer (durations, pool sizes)
    pub fn parse_positive(value: &str, setting_name: &str) -> Result<u64, ApplicationError> {
        let parsed = value
            .trim()
            .parse::<u64>()
            .map_err(|e| ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!("Expected positive integer, got '{}': {}", value, e),
            })?;

        if parsed == 0 {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Value must be greater than zero".to_string(),
            });
        }

        Ok(parsed)
    }
}

/// Validators usable with [`ConfigSpec::validator`]
impl ConfigSpec {
    pub fn validate_integer_range(value: &str, min: i64, max: i64) -> Result<(), String> {
        let parsed = value
            .parse::<i64>()
            .map_err(|_| format!("Expected integer between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Value {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let parsed = value
            .parse::<u16>()
            .map_err(|_| format!("Expected port number between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Port {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    /// Accept IPv4, bracketed IPv6 or a hostname without whitespace
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if value.contains(':') {
            if value.starts_with('[') && value.ends_with(']') && value.len() <= 3 {
                return Err("Invalid IPv6 address format".to_string());
            }
            return Ok(());
        }

        let parts: Vec<&str> = value.split('.').collect();
        if parts.len() == 4 && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) {
            for (i, part) in parts.iter().enumerate() {
                let octet = part
                    .parse::<u16>()
                    .map_err(|_| format!("IPv4 address part {} must be a number", i + 1))?;
                if octet > 255 {
                    return Err(format!(
                        "IPv4 address part {} must be between 0-255, got {}",
                        i + 1,
                        octet
                    ));
                }
            }
            return Ok(());
        }

        if value.chars().any(char::is_whitespace) {
            return Err("Host address cannot contain whitespace characters".to_string());
        }

        Ok(())
    }

    /// Only the backends compiled into sea-orm are accepted
    pub fn validate_database_url(value: &str) -> Result<(), String> {
        if value.starts_with("sqlite:")
            || value.starts_with("postgres://")
            || value.starts_with("postgresql://")
        {
            Ok(())
        } else {
            Err(format!("Unsupported database URL scheme: {}", value))
        }
    }

    pub fn validate_http_origin(value: &str) -> Result<(), String> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err(format!("Origin must start with http:// or https://, got {}", value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    fn spec(env: MockEnvironment) -> ConfigSpec {
        ConfigSpec::new(Arc::new(env))
    }

    #[test]
    fn test_env_value_wins_over_default() {
        let loaded = spec(MockEnvironment::empty().with_var("HOST", "127.0.0.1"))
            .env_override("HOST")
            .default_value("0.0.0.0")
            .load_setting_with_source()
            .unwrap();

        assert_eq!(loaded.value, "127.0.0.1");
        assert_eq!(
            loaded.source,
            ConfigValueSource::EnvironmentVariable {
                name: "HOST".to_string()
            }
        );
    }

    #[test]
    fn test_fallback_variable_is_used_when_first_is_missing() {
        let loaded = spec(MockEnvironment::empty().with_var("APP_PORT", "9090"))
            .env_override("PORT")
            .env_override("APP_PORT")
            .default_value("8080")
            .load_setting_with_source()
            .unwrap();

        assert_eq!(loaded.value, "9090");
    }

    #[test]
    fn test_default_is_used_without_env() {
        let loaded = spec(MockEnvironment::empty())
            .env_override("APP_ENV")
            .default_value("development")
            .load_setting_with_source()
            .unwrap();

        assert_eq!(loaded.value, "development");
        assert_eq!(loaded.source, ConfigValueSource::Default);
    }

    #[test]
    fn test_required_without_value_fails() {
        let result = spec(MockEnvironment::empty())
            .env_override("SOMETHING")
            .required(true)
            .load_setting_with_source();

        match result {
            Err(ApplicationError::InvalidSetting { setting_name, .. }) => {
                assert_eq!(setting_name, "SOMETHING")
            }
            other => panic!("Expected InvalidSetting, got {:?}", other),
        }
    }

    #[test]
    fn test_validator_rejects_env_value() {
        let result = spec(MockEnvironment::empty().with_var("DATABASE_URL", "mysql://x"))
            .env_override("DATABASE_URL")
            .validator(ConfigSpec::validate_database_url)
            .load_setting_with_source();

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(ConfigSpec::parse_port("8080", "PORT").unwrap(), 8080);
        assert!(ConfigSpec::parse_port("0", "PORT").is_err());
        assert!(ConfigSpec::parse_port("70000", "PORT").is_err());
        assert!(ConfigSpec::parse_port("abc", "PORT").is_err());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(ConfigSpec::parse_positive("1440", "JWT").unwrap(), 1440);
        assert!(ConfigSpec::parse_positive("0", "JWT").is_err());
        assert!(ConfigSpec::parse_positive("-1", "JWT").is_err());
    }

    #[test]
    fn test_validate_host_address() {
        assert!(ConfigSpec::validate_host_address("0.0.0.0").is_ok());
        assert!(ConfigSpec::validate_host_address("localhost").is_ok());
        assert!(ConfigSpec::validate_host_address("[::1]").is_ok());
        assert!(ConfigSpec::validate_host_address("256.1.1.1").is_err());
        assert!(ConfigSpec::validate_host_address("my host").is_err());
        assert!(ConfigSpec::validate_host_address("").is_err());
    }

    #[test]
    fn test_validate_database_url() {
        assert!(ConfigSpec::validate_database_url("sqlite://inventario.db?mode=rwc").is_ok());
        assert!(ConfigSpec::validate_database_url("sqlite::memory:").is_ok());
        assert!(ConfigSpec::validate_database_url("postgres://u:p@localhost/db").is_ok());
        assert!(ConfigSpec::validate_database_url("mysql://localhost").is_err());
    }
}
