use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::{BootstrapSettings, EnvironmentProvider, SecretManager, SystemEnvironment};
use crate::errors::InternalError;
use crate::services::{
    AccesoRemotoService, AuthService, BackupService, ConfiguracionRedService, DependenciaService,
    EquipoService, EstadoEquipoService, FuncionarioService, HardwareInternoService,
    PerifericoService, ReporteServicioService, RepuestoService, SecretariaService, SoftwareService,
    TipoMantenimientoService, TokenService, UsuarioResponsableService, UsuarioSistemaService,
};
use crate::stores::{
    AccesoRemotoStore, BackupStore, ConfiguracionRedStore, DependenciaStore, EquipoStore,
    EstadoEquipoStore, FuncionarioStore, HardwareInternoStore, PerifericoStore,
    ReporteServicioStore, RepuestoStore, SecretariaStore, SoftwareStore, TipoMantenimientoStore,
    UsuarioResponsableStore, UsuarioSistemaStore, UsuarioStore,
};

/// Everything the API layer needs, created once in main.rs
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(db, settings)
///   ↓ creates once
///   ├─ secret_manager
///   ├─ stores (one per table, shared through Arc)
///   └─ services (hold the stores they read)
///   ↓ wrapped in Arc<AppData>
///   └─ every Api struct
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    pub secret_manager: Arc<SecretManager>,
    pub usuario_store: Arc<UsuarioStore>,

    pub token_service: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,

    pub secretaria_service: Arc<SecretariaService>,
    pub dependencia_service: Arc<DependenciaService>,
    pub usuario_responsable_service: Arc<UsuarioResponsableService>,
    pub estado_equipo_service: Arc<EstadoEquipoService>,
    pub equipo_service: Arc<EquipoService>,

    pub periferico_service: Arc<PerifericoService>,
    pub hardware_interno_service: Arc<HardwareInternoService>,
    pub software_service: Arc<SoftwareService>,
    pub configuracion_red_service: Arc<ConfiguracionRedService>,
    pub usuario_sistema_service: Arc<UsuarioSistemaService>,
    pub acceso_remoto_service: Arc<AccesoRemotoService>,
    pub backup_service: Arc<BackupService>,

    pub funcionario_service: Arc<FuncionarioService>,
    pub reporte_servicio_service: Arc<ReporteServicioService>,
    pub tipo_mantenimiento_service: Arc<TipoMantenimientoService>,
    pub repuesto_service: Arc<RepuestoService>,
}

impl AppData {
    /// Load secrets from the process environment and build every store and service
    ///
    /// The database must already be migrated.
    pub async fn init(db: DatabaseConnection, settings: &BootstrapSettings) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let env_provider: Arc<dyn EnvironmentProvider + Send + Sync> = Arc::new(SystemEnvironment);
        let secret_manager = Arc::new(
            SecretManager::init_with_provider(env_provider.clone())
                .map_err(|e| InternalError::parse("secret_manager", format!("Secret manager init failed: {}", e)))?,
        );

        let app_data = Self::build(db, env_provider, secret_manager, settings);
        tracing::info!("AppData initialization complete");
        Ok(app_data)
    }

    /// Wire stores and services from already loaded secrets
    pub fn build(
        db: DatabaseConnection,
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
        secret_manager: Arc<SecretManager>,
        settings: &BootstrapSettings,
    ) -> Self {
        let usuario_store = Arc::new(UsuarioStore::new(db.clone(), secret_manager.pepper().to_string()));
        let secretarias = Arc::new(SecretariaStore::new(db.clone()));
        let dependencias = Arc::new(DependenciaStore::new(db.clone()));
        let responsables = Arc::new(UsuarioResponsableStore::new(db.clone()));
        let estados = Arc::new(EstadoEquipoStore::new(db.clone()));
        let equipos = Arc::new(EquipoStore::new(db.clone()));
        let funcionarios = Arc::new(FuncionarioStore::new(db.clone()));
        let reportes = Arc::new(ReporteServicioStore::new(db.clone()));

        let token_service = Arc::new(TokenService::new(
            secret_manager.jwt_secret().to_string(),
            secret_manager.refresh_token_secret().to_string(),
            settings.jwt_expiration_minutes(),
            settings.refresh_expiration_days(),
        ));
        let auth_service = Arc::new(AuthService::new(usuario_store.clone(), token_service.clone()));

        Self {
            secretaria_service: Arc::new(SecretariaService::new(secretarias.clone())),
            dependencia_service: Arc::new(DependenciaService::new(
                dependencias.clone(),
                secretarias,
                responsables.clone(),
            )),
            usuario_responsable_service: Arc::new(UsuarioResponsableService::new(
                responsables.clone(),
                dependencias.clone(),
            )),
            estado_equipo_service: Arc::new(EstadoEquipoService::new(estados.clone(), equipos.clone())),
            equipo_service: Arc::new(EquipoService::new(
                equipos.clone(),
                responsables.clone(),
                estados,
                dependencias,
            )),

            periferico_service: Arc::new(PerifericoService::new(
                Arc::new(PerifericoStore::new(db.clone())),
                equipos.clone(),
            )),
            hardware_interno_service: Arc::new(HardwareInternoService::new(
                Arc::new(HardwareInternoStore::new(db.clone())),
                equipos.clone(),
            )),
            software_service: Arc::new(SoftwareService::new(
                Arc::new(SoftwareStore::new(db.clone())),
                equipos.clone(),
            )),
            configuracion_red_service: Arc::new(ConfiguracionRedService::new(
                Arc::new(ConfiguracionRedStore::new(db.clone())),
                equipos.clone(),
            )),
            usuario_sistema_service: Arc::new(UsuarioSistemaService::new(
                Arc::new(UsuarioSistemaStore::new(db.clone())),
                equipos.clone(),
            )),
            acceso_remoto_service: Arc::new(AccesoRemotoService::new(
                Arc::new(AccesoRemotoStore::new(db.clone())),
                equipos.clone(),
            )),
            backup_service: Arc::new(BackupService::new(
                Arc::new(BackupStore::new(db.clone())),
                equipos.clone(),
            )),

            funcionario_service: Arc::new(FuncionarioService::new(funcionarios.clone())),
            reporte_servicio_service: Arc::new(ReporteServicioService::new(
                reportes.clone(),
                equipos,
                funcionarios,
                responsables,
                usuario_store.clone(),
            )),
            tipo_mantenimiento_service: Arc::new(TipoMantenimientoService::new(
                Arc::new(TipoMantenimientoStore::new(db.clone())),
                reportes.clone(),
            )),
            repuesto_service: Arc::new(RepuestoService::new(
                Arc::new(RepuestoStore::new(db.clone())),
                reportes,
            )),

            db,
            env_provider,
            secret_manager,
            usuario_store,
            token_service,
            auth_service,
        }
    }
}
