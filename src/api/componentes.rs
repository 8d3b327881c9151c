//! Endpoints for the records attached to an equipment. Each group offers plain
//! CRUD; listings by equipment live under `/equipos/:id/...`.

use std::sync::Arc;

use poem_openapi::param::{Path, Query};
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::api::{BearerAuth, Created, authenticate};
use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::componentes::{
    AccesoRemotoRequest, AccesoRemotoResponse, BackupRequest, BackupResponse,
    ConfiguracionRedRequest, ConfiguracionRedResponse, HardwareInternoRequest,
    HardwareInternoResponse, PerifericoRequest, PerifericoResponse, SoftwareRequest,
    SoftwareResponse, UsuarioSistemaRequest, UsuarioSistemaResponse,
};

#[derive(Tags)]
enum ComponenteTags {
    /// Keyboards, mice, monitors
    Perifericos,
    /// Disks, memory, processors
    HardwareInterno,
    /// Installed software
    Software,
    /// IP configuration, one per equipment
    ConfiguracionesRed,
    /// Operating-system accounts
    UsuariosSistema,
    /// Remote desktop credentials
    AccesosRemotos,
    /// Backup log
    Backups,
}

pub struct PerifericoApi {
    app_data: Arc<AppData>,
}

impl PerifericoApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "ComponenteTags::Perifericos")]
impl PerifericoApi {
    #[oai(path = "/perifericos", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<PerifericoRequest>,
    ) -> Result<Created<PerifericoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.periferico_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/perifericos", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<PerifericoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.periferico_service.list().await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/perifericos/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<PerifericoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.periferico_service.get(id.0).await?.into()))
    }

    #[oai(path = "/perifericos/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<PerifericoRequest>,
    ) -> Result<Json<PerifericoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.periferico_service.update(id.0, &body.0).await?.into()))
    }

    #[oai(path = "/perifericos/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.periferico_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Periférico eliminado correctamente")))
    }
}

pub struct HardwareInternoApi {
    app_data: Arc<AppData>,
}

impl HardwareInternoApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "ComponenteTags::HardwareInterno")]
impl HardwareInternoApi {
    #[oai(path = "/hardware-interno", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<HardwareInternoRequest>,
    ) -> Result<Created<HardwareInternoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.hardware_interno_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/hardware-interno", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<HardwareInternoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.hardware_interno_service.list().await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/hardware-interno/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<HardwareInternoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.hardware_interno_service.get(id.0).await?.into()))
    }

    #[oai(path = "/hardware-interno/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<HardwareInternoRequest>,
    ) -> Result<Json<HardwareInternoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.hardware_interno_service.update(id.0, &body.0).await?.into()))
    }

    #[oai(path = "/hardware-interno/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.hardware_interno_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Hardware interno eliminado correctamente")))
    }
}

pub struct SoftwareApi {
    app_data: Arc<AppData>,
}

impl SoftwareApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "ComponenteTags::Software")]
impl SoftwareApi {
    #[oai(path = "/software", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<SoftwareRequest>,
    ) -> Result<Created<SoftwareResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.software_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/software", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<SoftwareResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.software_service.list().await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/software/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<SoftwareResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.software_service.get(id.0).await?.into()))
    }

    #[oai(path = "/software/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<SoftwareRequest>,
    ) -> Result<Json<SoftwareResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.software_service.update(id.0, &body.0).await?.into()))
    }

    #[oai(path = "/software/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.software_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Software eliminado correctamente")))
    }
}

pub struct ConfiguracionRedApi {
    app_data: Arc<AppData>,
}

impl ConfiguracionRedApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "ComponenteTags::ConfiguracionesRed")]
impl ConfiguracionRedApi {
    /// Register the network configuration of an equipment; a second one is a conflict
    #[oai(path = "/configuraciones-red", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<ConfiguracionRedRequest>,
    ) -> Result<Created<ConfiguracionRedResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.configuracion_red_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/configuraciones-red", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<ConfiguracionRedResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.configuracion_red_service.list().await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/configuraciones-red/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<ConfiguracionRedResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.configuracion_red_service.get(id.0).await?.into()))
    }

    #[oai(path = "/configuraciones-red/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<ConfiguracionRedRequest>,
    ) -> Result<Json<ConfiguracionRedResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.configuracion_red_service.update(id.0, &body.0).await?.into()))
    }

    #[oai(path = "/configuraciones-red/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.configuracion_red_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Configuración de red eliminada correctamente")))
    }
}

pub struct UsuarioSistemaApi {
    app_data: Arc<AppData>,
}

impl UsuarioSistemaApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "ComponenteTags::UsuariosSistema")]
impl UsuarioSistemaApi {
    #[oai(path = "/usuarios-sistema", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<UsuarioSistemaRequest>,
    ) -> Result<Created<UsuarioSistemaResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.usuario_sistema_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/usuarios-sistema", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<UsuarioSistemaResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.usuario_sistema_service.list().await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    /// Search accounts by partial name and/or equipment
    #[oai(path = "/usuarios-sistema/buscar", method = "get")]
    async fn buscar(
        &self,
        auth: BearerAuth,
        nombre_usuario: Query<Option<String>>,
        equipo_id: Query<Option<i32>>,
    ) -> Result<Json<Vec<UsuarioSistemaResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self
            .app_data
            .usuario_sistema_service
            .buscar(nombre_usuario.0, equipo_id.0)
            .await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/usuarios-sistema/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<UsuarioSistemaResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.usuario_sistema_service.get(id.0).await?.into()))
    }

    #[oai(path = "/usuarios-sistema/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UsuarioSistemaRequest>,
    ) -> Result<Json<UsuarioSistemaResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.usuario_sistema_service.update(id.0, &body.0).await?.into()))
    }

    #[oai(path = "/usuarios-sistema/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.usuario_sistema_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Usuario del sistema eliminado correctamente")))
    }
}

pub struct AccesoRemotoApi {
    app_data: Arc<AppData>,
}

impl AccesoRemotoApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "ComponenteTags::AccesosRemotos")]
impl AccesoRemotoApi {
    #[oai(path = "/accesos-remotos", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<AccesoRemotoRequest>,
    ) -> Result<Created<AccesoRemotoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.acceso_remoto_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/accesos-remotos", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<AccesoRemotoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.acceso_remoto_service.list().await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/accesos-remotos/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<AccesoRemotoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.acceso_remoto_service.get(id.0).await?.into()))
    }

    #[oai(path = "/accesos-remotos/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<AccesoRemotoRequest>,
    ) -> Result<Json<AccesoRemotoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.acceso_remoto_service.update(id.0, &body.0).await?.into()))
    }

    #[oai(path = "/accesos-remotos/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.acceso_remoto_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Acceso remoto eliminado correctamente")))
    }
}

pub struct BackupApi {
    app_data: Arc<AppData>,
}

impl BackupApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "ComponenteTags::Backups")]
impl BackupApi {
    #[oai(path = "/backups", method = "post")]
    async fn create(&self, auth: BearerAuth, body: Json<BackupRequest>) -> Result<Created<BackupResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.backup_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/backups", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<BackupResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.backup_service.list().await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/backups/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<BackupResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.backup_service.get(id.0).await?.into()))
    }

    #[oai(path = "/backups/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<BackupRequest>,
    ) -> Result<Json<BackupResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.backup_service.update(id.0, &body.0).await?.into()))
    }

    #[oai(path = "/backups/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.backup_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Backup eliminado correctamente")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{admin_token, bearer, crear_equipo_completo, setup_test_app_data};
    use crate::types::catalog::{AsignacionIp, TipoPeriferico};

    #[tokio::test]
    async fn test_periferico_crud() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let equipo = crear_equipo_completo(&app_data.db, "SER-400").await;
        let api = PerifericoApi::new(app_data);

        let request = PerifericoRequest {
            equipo_id: equipo.id,
            tipo_periferico: TipoPeriferico::Monitor,
            placa_inventario: Some("  ".to_string()),
            marca: Some(" Samsung ".to_string()),
            serial: None,
        };
        let Created::Created(created) = api.create(bearer(&token), Json(request.clone())).await.unwrap();
        assert_eq!(created.marca.as_deref(), Some("Samsung"));
        assert_eq!(created.placa_inventario, None);

        let updated = api
            .update(
                bearer(&token),
                Path(created.id),
                Json(PerifericoRequest {
                    tipo_periferico: TipoPeriferico::Teclado,
                    ..request
                }),
            )
            .await
            .unwrap();
        assert_eq!(updated.tipo_periferico, TipoPeriferico::Teclado);

        api.delete(bearer(&token), Path(created.id)).await.unwrap();
        let result = api.get(bearer(&token), Path(created.id)).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_component_with_unknown_equipo_is_bad_request() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let api = SoftwareApi::new(app_data);

        let result = api
            .create(
                bearer(&token),
                Json(SoftwareRequest {
                    equipo_id: 999,
                    nombre: "LibreOffice".to_string(),
                    version: None,
                    tipo_licencia: None,
                    categoria: None,
                }),
            )
            .await;

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_second_network_configuration_is_conflict() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let equipo = crear_equipo_completo(&app_data.db, "SER-401").await;
        let api = ConfiguracionRedApi::new(app_data);

        let request = ConfiguracionRedRequest {
            equipo_id: equipo.id,
            direccion_ip: "192.168.1.20".to_string(),
            asignacion_ip: Some(AsignacionIp::Manual),
            nombre_dispositivo: "SISTEMAS-01".to_string(),
            conectividad: None,
        };
        api.create(bearer(&token), Json(request.clone())).await.unwrap();
        let result = api.create(bearer(&token), Json(request)).await;

        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_usuario_sistema_unique_per_equipo_and_search() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let primero = crear_equipo_completo(&app_data.db, "SER-402").await;
        let segundo = crear_equipo_completo(&app_data.db, "SER-403").await;
        let api = UsuarioSistemaApi::new(app_data);

        let cuenta = |equipo_id: i32| UsuarioSistemaRequest {
            equipo_id,
            nombre_usuario: "soporte".to_string(),
            contrasena: None,
            es_administrador: None,
        };
        let Created::Created(created) = api.create(bearer(&token), Json(cuenta(primero.id))).await.unwrap();
        assert!(!created.es_administrador);

        let duplicate = api.create(bearer(&token), Json(cuenta(primero.id))).await;
        assert!(matches!(duplicate, Err(ApiError::Conflict(_))));

        api.create(bearer(&token), Json(cuenta(segundo.id))).await.unwrap();

        let all = api
            .buscar(bearer(&token), Query(Some("sopo".to_string())), Query(None))
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let filtered = api
            .buscar(bearer(&token), Query(Some("sopo".to_string())), Query(Some(segundo.id)))
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].equipo_id, segundo.id);
    }

    #[tokio::test]
    async fn test_acceso_remoto_defaults_platform() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let equipo = crear_equipo_completo(&app_data.db, "SER-404").await;
        let api = AccesoRemotoApi::new(app_data);

        let Created::Created(created) = api
            .create(
                bearer(&token),
                Json(AccesoRemotoRequest {
                    equipo_id: equipo.id,
                    plataforma: None,
                    usuario: "soporte".to_string(),
                    contrasena: None,
                    id_conexion: "123 456 789".to_string(),
                }),
            )
            .await
            .unwrap();

        assert_eq!(created.plataforma, "AnyDesk");
    }

    #[tokio::test]
    async fn test_backup_requires_route() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let equipo = crear_equipo_completo(&app_data.db, "SER-405").await;
        let api = BackupApi::new(app_data);

        let result = api
            .create(
                bearer(&token),
                Json(BackupRequest {
                    equipo_id: equipo.id,
                    fecha: None,
                    num_carpetas: Some(3),
                    peso_total_archivos: None,
                    ruta_backup: "   ".to_string(),
                    se_realizo_backup: true,
                }),
            )
            .await;

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_backup_rejects_negative_folder_count() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let equipo = crear_equipo_completo(&app_data.db, "SER-406").await;
        let api = BackupApi::new(app_data);
        let backup = |num_carpetas| BackupRequest {
            equipo_id: equipo.id,
            fecha: None,
            num_carpetas,
            peso_total_archivos: Some("2 GB".to_string()),
            ruta_backup: "\\\\servidor\\backups\\equipo".to_string(),
            se_realizo_backup: true,
        };

        let negative = api.create(bearer(&token), Json(backup(Some(-1)))).await;
        assert!(matches!(negative, Err(ApiError::BadRequest(_))));

        let Created::Created(created) = api.create(bearer(&token), Json(backup(Some(0)))).await.unwrap();
        assert_eq!(created.num_carpetas, Some(0));

        let update = api.update(bearer(&token), Path(created.id), Json(backup(Some(-5)))).await;
        assert!(matches!(update, Err(ApiError::BadRequest(_))));
    }
}
