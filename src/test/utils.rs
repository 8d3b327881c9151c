use std::sync::Arc;

use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use poem_openapi::auth::Bearer;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, IntoActiveModel, Set};

use crate::api::BearerAuth;
use crate::app_data::AppData;
use crate::config::{BootstrapSettings, MockEnvironment, SecretManager};
use crate::stores::{
    DependenciaStore, EquipoStore, EstadoEquipoStore, NuevoUsuario, SecretariaStore,
    UsuarioResponsableStore, UsuarioStore,
};
use crate::types::catalog::Rol;
use crate::types::db::{dependencia, equipo, estado_equipo, secretaria, usuario, usuario_responsable};
use crate::types::dto::equipo::EquipoRequest;
use crate::types::dto::organizacion::{
    DependenciaRequest, SecretariaRequest, UsuarioResponsableRequest,
};

pub const TEST_JWT_SECRET: &str = "test-secret-key-minimum-32-characters-long";
pub const TEST_REFRESH_SECRET: &str = "test-refresh-secret-minimum-32-chars";
pub const TEST_PEPPER: &str = "test-pepper-for-unit-tests";
pub const TEST_PASSWORD: &str = "secreto123";

/// Fresh in-memory SQLite database with every migration applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

fn test_environment() -> MockEnvironment {
    MockEnvironment::empty().with_vars(&[
        ("JWT_SECRET", TEST_JWT_SECRET),
        ("PEPPER", TEST_PEPPER),
        ("REFRESH_TOKEN_SECRET", TEST_REFRESH_SECRET),
    ])
}

/// AppData over a fresh database, with secrets injected through a mock environment
pub async fn setup_test_app_data() -> Arc<AppData> {
    let db = setup_test_db().await;
    let env = Arc::new(test_environment());

    let settings = BootstrapSettings::from_env_provider(env.clone())
        .expect("Failed to load test settings");
    let secret_manager = Arc::new(
        SecretManager::init_with_provider(env.clone()).expect("Failed to initialize test SecretManager"),
    );

    Arc::new(AppData::build(db, env, secret_manager, &settings))
}

pub async fn crear_usuario(store: &UsuarioStore, username: &str, rol: Rol) -> usuario::Model {
    store
        .create_usuario(NuevoUsuario {
            nombre: "Nombre".to_string(),
            apellido: "Apellido".to_string(),
            email: format!("{}@tumaco.gov.co", username),
            username: username.to_string(),
            password: TEST_PASSWORD.to_string(),
            rol,
            cedula: Some("1087000000".to_string()),
        })
        .await
        .expect("Failed to create test usuario")
}

/// Mark a usuario inactive directly in the table
pub async fn desactivar_usuario(db: &DatabaseConnection, usuario: usuario::Model) {
    let mut model = usuario.into_active_model();
    model.activo = Set(false);
    model.update(db).await.expect("Failed to deactivate test usuario");
}

/// Access token of a freshly created admin
pub async fn admin_token(app_data: &AppData) -> String {
    let admin = crear_usuario(&app_data.usuario_store, "admin", Rol::Admin).await;
    let (token, _) = app_data
        .token_service
        .generate_jwt(&admin)
        .expect("Failed to sign test token");
    token
}

pub fn bearer(token: &str) -> BearerAuth {
    BearerAuth(Bearer {
        token: token.to_string(),
    })
}

pub async fn crear_secretaria(db: &DatabaseConnection, nombre: &str) -> secretaria::Model {
    SecretariaStore::new(db.clone())
        .create(&SecretariaRequest {
            nombre: nombre.to_string(),
            descripcion: "Secretaría de prueba".to_string(),
            ubicacion: "Edificio principal".to_string(),
            secretario: "Secretario de prueba".to_string(),
            telefono: None,
        })
        .await
        .expect("Failed to create test secretaria")
}

pub async fn crear_dependencia(db: &DatabaseConnection, secretaria_id: i32, nombre: &str) -> dependencia::Model {
    DependenciaStore::new(db.clone())
        .create(&DependenciaRequest {
            secretaria_id,
            nombre: nombre.to_string(),
            descripcion: "Dependencia de prueba".to_string(),
            ubicacion_oficina: "Piso 2".to_string(),
            jefe_oficina: "Jefe de prueba".to_string(),
            correo_institucional: "dependencia@tumaco.gov.co".to_string(),
            telefono: None,
        })
        .await
        .expect("Failed to create test dependencia")
}

pub async fn crear_responsable(
    db: &DatabaseConnection,
    dependencia_id: i32,
    cedula: &str,
) -> usuario_responsable::Model {
    UsuarioResponsableStore::new(db.clone())
        .create(&UsuarioResponsableRequest {
            dependencia_id,
            nombres_apellidos: "María Quiñones".to_string(),
            cedula: cedula.to_string(),
            correo_personal: None,
            tipo_vinculacion: None,
            celular: None,
        })
        .await
        .expect("Failed to create test usuario responsable")
}

pub async fn crear_estado(db: &DatabaseConnection, nombre: &str) -> estado_equipo::Model {
    EstadoEquipoStore::new(db.clone())
        .create(nombre, "Estado de prueba", true)
        .await
        .expect("Failed to create test estado")
}

pub fn equipo_request(serial: &str) -> EquipoRequest {
    EquipoRequest {
        usuario_responsable_id: None,
        estado_equipo_id: None,
        tipo_dispositivo: None,
        placa_inventario: None,
        marca: "Lenovo".to_string(),
        serial: serial.to_string(),
        modelo: Some("ThinkCentre".to_string()),
        fecha_diligenciamiento: Some(Utc::now()),
        observaciones_generales: None,
    }
}

/// Equipment owned by a fresh secretaria → dependencia → responsable chain
pub async fn crear_equipo_completo(db: &DatabaseConnection, serial: &str) -> equipo::Model {
    let secretaria = crear_secretaria(db, &format!("Secretaría {}", serial)).await;
    let dependencia = crear_dependencia(db, secretaria.id, "Sistemas").await;
    let responsable = crear_responsable(db, dependencia.id, &format!("CC-{}", serial)).await;
    let estado = crear_estado(db, &format!("Estado {}", serial)).await;

    EquipoStore::new(db.clone())
        .create(&EquipoRequest {
            usuario_responsable_id: Some(responsable.id),
            estado_equipo_id: Some(estado.id),
            ..equipo_request(serial)
        })
        .await
        .expect("Failed to create test equipo")
}
