use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{EnvironmentProvider, SystemEnvironment};

/// Configuration for application logging
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub log_level: String,
    pub app_log_file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        let log_level = env_provider
            .get_var("LOG_LEVEL")
            .unwrap_or_else(|| "info,sqlx=warn".to_string());

        let app_log_file = env_provider
            .get_var("APP_LOG_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            log_level,
            app_log_file,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Initialize the tracing subscriber with console and optional file output
///
/// The file layer rotates daily and is enabled only when `APP_LOG_FILE` is set.
pub fn init_logging() -> Result<(), LoggingError> {
    let config = LoggingConfig::from_env();

    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter.clone());

    let subscriber = tracing_subscriber::registry().with(console_layer);

    if let Some(log_file_path) = &config.app_log_file {
        let directory = log_file_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::path::Path::new("."));
        std::fs::create_dir_all(directory)?;

        let file_name = log_file_path
            .file_name()
            .ok_or_else(|| LoggingError::InitializationError("Invalid log file path".to_string()))?;
        let file_appender = tracing_appender::rolling::daily(directory, file_name);

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_target(true)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter);

        subscriber
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    } else {
        subscriber
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_defaults_without_env() {
        let config = LoggingConfig::from_env_provider(Arc::new(MockEnvironment::empty()));
        assert_eq!(config.log_level, "info,sqlx=warn");
        assert_eq!(config.app_log_file, None);
    }

    #[test]
    fn test_reads_level_and_file() {
        let env = MockEnvironment::empty()
            .with_var("LOG_LEVEL", "debug")
            .with_var("APP_LOG_FILE", "logs/inventario.log");
        let config = LoggingConfig::from_env_provider(Arc::new(env));

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.app_log_file, Some(PathBuf::from("logs/inventario.log")));
    }

    #[test]
    fn test_blank_file_disables_file_layer() {
        let env = MockEnvironment::empty().with_var("APP_LOG_FILE", "  ");
        let config = LoggingConfig::from_env_provider(Arc::new(env));
        assert_eq!(config.app_log_file, None);
    }
}
