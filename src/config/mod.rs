pub mod bootstrap_settings;
pub mod config_spec;
pub mod database;
pub mod env_provider;
pub mod errors;
pub mod logging;
mod secret_config;
mod secret_manager;

pub use bootstrap_settings::BootstrapSettings;
pub use config_spec::ConfigSpec;
pub use database::{connect_database, migrate_database};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::ApplicationError;
pub use logging::init_logging;
pub use secret_config::{SecretConfig, SecretType};
pub use secret_manager::{SecretError, SecretManager};
