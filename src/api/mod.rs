// API layer - HTTP endpoints
pub mod auth;
pub mod componentes;
pub mod equipos;
pub mod estados_equipo;
pub mod funcionarios;
pub mod health;
pub mod organizacion;
pub mod reportes_servicio;

use std::sync::Arc;

pub use auth::{AuthApi, BearerAuth};
pub use componentes::{
    AccesoRemotoApi, BackupApi, ConfiguracionRedApi, HardwareInternoApi, PerifericoApi,
    SoftwareApi, UsuarioSistemaApi,
};
pub use equipos::EquiposApi;
pub use estados_equipo::EstadosEquipoApi;
pub use funcionarios::FuncionariosApi;
pub use health::HealthApi;
pub use organizacion::{DependenciasApi, SecretariasApi, UsuariosResponsablesApi};
pub use reportes_servicio::{RepuestosApi, ReportesServicioApi, TiposMantenimientoApi};

use poem_openapi::types::ToJSON;
use poem_openapi::{ApiResponse, OpenApiService, payload::Json};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::types::internal::auth::Claims;

/// Every endpoint group mounted under `/api`
pub type InventarioApi = (
    HealthApi,
    AuthApi,
    (SecretariasApi, DependenciasApi, UsuariosResponsablesApi, EstadosEquipoApi),
    EquiposApi,
    (
        PerifericoApi,
        HardwareInternoApi,
        SoftwareApi,
        ConfiguracionRedApi,
        UsuarioSistemaApi,
        AccesoRemotoApi,
        BackupApi,
    ),
    (FuncionariosApi, ReportesServicioApi, TiposMantenimientoApi, RepuestosApi),
);

/// 201 response of every create endpoint
#[derive(ApiResponse)]
pub enum Created<T: ToJSON> {
    #[oai(status = 201)]
    Created(Json<T>),
}

/// Validate the bearer token of an inventory request
pub async fn authenticate(app_data: &AppData, auth: &BearerAuth) -> Result<Claims, ApiError> {
    app_data
        .auth_service
        .authenticate(&auth.0.token)
        .await
        .map_err(ApiError::from)
}

/// Build the OpenAPI service with every endpoint group
pub fn api_service(app_data: Arc<AppData>, server_url: &str) -> OpenApiService<InventarioApi, ()> {
    let apis = (
        HealthApi::new(app_data.clone()),
        AuthApi::new(app_data.clone()),
        (
            SecretariasApi::new(app_data.clone()),
            DependenciasApi::new(app_data.clone()),
            UsuariosResponsablesApi::new(app_data.clone()),
            EstadosEquipoApi::new(app_data.clone()),
        ),
        EquiposApi::new(app_data.clone()),
        (
            PerifericoApi::new(app_data.clone()),
            HardwareInternoApi::new(app_data.clone()),
            SoftwareApi::new(app_data.clone()),
            ConfiguracionRedApi::new(app_data.clone()),
            UsuarioSistemaApi::new(app_data.clone()),
            AccesoRemotoApi::new(app_data.clone()),
            BackupApi::new(app_data.clone()),
        ),
        (
            FuncionariosApi::new(app_data.clone()),
            ReportesServicioApi::new(app_data.clone()),
            TiposMantenimientoApi::new(app_data.clone()),
            RepuestosApi::new(app_data),
        ),
    );

    OpenApiService::new(apis, "Inventario Backend API", env!("CARGO_PKG_VERSION"))
        .server(server_url)
}
