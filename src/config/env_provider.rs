#[cfg(test)]
use std::collections::HashMap;

/// Trait for providing environment variable access
///
/// Settings and secrets read through this trait so tests can inject values
/// without touching the process environment.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;

    /// First variable in `keys` that is set
    fn get_first(&self, keys: &[&str]) -> Option<(String, String)> {
        keys.iter()
            .find_map(|key| self.get_var(key).map(|value| (key.to_string(), value)))
    }
}

/// Production environment provider that reads from system environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test environment provider with configurable variables
#[cfg(test)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    pub fn empty() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_vars(mut self, vars: &[(&str, &str)]) -> Self {
        for (key, value) in vars {
            self.vars.insert(key.to_string(), value.to_string());
        }
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_environment_provider() {
        let provider = MockEnvironment::empty()
            .with_var("TEST_KEY", "test_value")
            .with_vars(&[("KEY1", "value1"), ("KEY2", "value2")]);

        assert_eq!(provider.get_var("TEST_KEY"), Some("test_value".to_string()));
        assert_eq!(provider.get_var("KEY2"), Some("value2".to_string()));
        assert_eq!(provider.get_var("NON_EXISTENT"), None);
    }

    #[test]
    fn test_get_first_respects_order() {
        let provider = MockEnvironment::empty()
            .with_var("APP_PORT", "9000")
            .with_var("PORT", "8081");

        assert_eq!(
            provider.get_first(&["PORT", "APP_PORT"]),
            Some(("PORT".to_string(), "8081".to_string()))
        );

        let fallback = MockEnvironment::empty().with_var("APP_PORT", "9000");
        assert_eq!(
            fallback.get_first(&["PORT", "APP_PORT"]),
            Some(("APP_PORT".to_string(), "9000".to_string()))
        );
        assert_eq!(MockEnvironment::empty().get_first(&["PORT"]), None);
    }
}
