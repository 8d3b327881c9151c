// Common test utilities for integration tests

use std::collections::HashMap;
use std::sync::Arc;

use inventario_backend::api::api_service;
use inventario_backend::app_data::AppData;
use inventario_backend::config::{BootstrapSettings, EnvironmentProvider, SecretManager};
use inventario_backend::stores::NuevoUsuario;
use inventario_backend::types::catalog::Rol;
use migration::{Migrator, MigratorTrait};
use poem::test::TestClient;
use poem::{Endpoint, Route};
use sea_orm::{Database, DatabaseConnection};
use serde_json::json;

pub const PASSWORD: &str = "secreto123";

/// Fixed variables standing in for the process environment
pub struct TestEnvironment {
    vars: HashMap<String, String>,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let vars = [
            ("JWT_SECRET", "integration-jwt-secret-at-least-32-chars"),
            ("PEPPER", "integration-pepper-16"),
            ("REFRESH_TOKEN_SECRET", "integration-refresh-secret-32-characters"),
        ];
        Self {
            vars: vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }
}

impl EnvironmentProvider for TestEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub async fn setup_app_data() -> Arc<AppData> {
    let db = setup_test_db().await;
    let env: Arc<dyn EnvironmentProvider + Send + Sync> = Arc::new(TestEnvironment::new());
    let settings = BootstrapSettings::from_env_provider(env.clone()).expect("Failed to load settings");
    let secrets = Arc::new(SecretManager::init_with_provider(env.clone()).expect("Failed to load secrets"));

    Arc::new(AppData::build(db, env, secrets, &settings))
}

/// The `/api` tree exactly as main.rs mounts it
pub fn app(app_data: Arc<AppData>) -> impl Endpoint {
    Route::new().nest("/api", api_service(app_data, "http://localhost/api"))
}

pub async fn crear_usuario(app_data: &AppData, username: &str, rol: Rol) {
    app_data
        .usuario_store
        .create_usuario(NuevoUsuario {
            nombre: "Prueba".to_string(),
            apellido: "Integración".to_string(),
            email: format!("{}@tumaco-narino.gov.co", username),
            username: username.to_string(),
            password: PASSWORD.to_string(),
            rol,
            cedula: None,
        })
        .await
        .expect("Failed to create usuario");
}

/// Log in through the API and return the access token
pub async fn login<E: Endpoint>(cli: &TestClient<E>, username: &str) -> String {
    let resp = cli
        .post("/api/auth/login")
        .body_json(&json!({ "username": username, "password": PASSWORD }))
        .send()
        .await;
    resp.assert_status_is_ok();

    let json = resp.json().await;
    json.value().object().get("token").string().to_string()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
