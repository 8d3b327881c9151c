use std::sync::Arc;

use poem_openapi::param::Path;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::api::{BearerAuth, Created, authenticate};
use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::componentes::{
    AccesoRemotoResponse, BackupResponse, ConfiguracionRedResponse, HardwareInternoResponse,
    PerifericoResponse, SoftwareResponse, UsuarioSistemaResponse,
};
use crate::types::dto::equipo::{EquipoCompletoResponse, EquipoRequest, EquipoResponse, HojaVidaResponse};
use crate::types::dto::reporte::ReporteServicioResponse;

#[derive(Tags)]
enum EquipoTags {
    /// Equipment records, hoja de vida and per-equipment listings
    Equipos,
}

/// Equipment endpoints
pub struct EquiposApi {
    app_data: Arc<AppData>,
}

impl EquiposApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "EquipoTags::Equipos")]
impl EquiposApi {
    #[oai(path = "/equipos", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<EquipoRequest>,
    ) -> Result<Created<EquipoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.equipo_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/equipos", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<EquipoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let equipos = self.app_data.equipo_service.list().await?;
        Ok(Json(equipos.into_iter().map(Into::into).collect()))
    }

    /// Hoja de vida of every equipment
    #[oai(path = "/equipos/detalle", method = "get")]
    async fn detalle(&self, auth: BearerAuth) -> Result<Json<Vec<HojaVidaResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.equipo_service.hojas_de_vida().await?))
    }

    /// Equipment with all of its child collections
    #[oai(path = "/equipos/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<EquipoCompletoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.equipo_service.get_completo(id.0).await?.into()))
    }

    #[oai(path = "/equipos/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<EquipoRequest>,
    ) -> Result<Json<EquipoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.equipo_service.update(id.0, &body.0).await?.into()))
    }

    /// Delete an equipment, its components and its reports' link to it
    #[oai(path = "/equipos/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.equipo_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Equipo eliminado correctamente")))
    }

    /// Equipment whose responsible user belongs to the dependencia `id`
    #[oai(path = "/equipos/:id/dependencia", method = "get")]
    async fn by_dependencia(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<Vec<EquipoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let equipos = self.app_data.equipo_service.list_by_dependencia(id.0).await?;
        Ok(Json(equipos.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/equipos/:id/hv", method = "get")]
    async fn hoja_vida(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<HojaVidaResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.equipo_service.hoja_vida(id.0).await?))
    }

    #[oai(path = "/equipos/:id/perifericos", method = "get")]
    async fn perifericos(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<Vec<PerifericoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.periferico_service.list_by_equipo(id.0).await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/equipos/:id/hardware-interno", method = "get")]
    async fn hardware_interno(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<Vec<HardwareInternoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.hardware_interno_service.list_by_equipo(id.0).await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/equipos/:id/software", method = "get")]
    async fn software(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<Vec<SoftwareResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.software_service.list_by_equipo(id.0).await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    /// The single network configuration of an equipment, 404 when none
    #[oai(path = "/equipos/:id/configuracion-red", method = "get")]
    async fn configuracion_red(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<ConfiguracionRedResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.configuracion_red_service.get_by_equipo(id.0).await?.into()))
    }

    #[oai(path = "/equipos/:id/usuarios-sistema", method = "get")]
    async fn usuarios_sistema(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<Vec<UsuarioSistemaResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.usuario_sistema_service.list_by_equipo(id.0).await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/equipos/:id/accesos-remotos", method = "get")]
    async fn accesos_remotos(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<Vec<AccesoRemotoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.acceso_remoto_service.list_by_equipo(id.0).await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/equipos/:id/backups", method = "get")]
    async fn backups(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<Vec<BackupResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.backup_service.list_by_equipo(id.0).await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/equipos/:id/reportes-servicio", method = "get")]
    async fn reportes_servicio(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<Vec<ReporteServicioResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.reporte_servicio_service.list_by_equipo(id.0).await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }
}
