use std::sync::Arc;

use poem_openapi::param::Path;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::api::{BearerAuth, Created, authenticate};
use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::equipo::EquipoResponse;
use crate::types::dto::organizacion::{EstadoEquipoRequest, EstadoEquipoResponse};

#[derive(Tags)]
enum EstadoTags {
    /// Equipment status catalog
    EstadosEquipo,
}

/// Equipment status endpoints
pub struct EstadosEquipoApi {
    app_data: Arc<AppData>,
}

impl EstadosEquipoApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "EstadoTags::EstadosEquipo")]
impl EstadosEquipoApi {
    #[oai(path = "/estados-equipo", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<EstadoEquipoRequest>,
    ) -> Result<Created<EstadoEquipoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.estado_equipo_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/estados-equipo", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<EstadoEquipoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let estados = self.app_data.estado_equipo_service.list().await?;
        Ok(Json(estados.into_iter().map(Into::into).collect()))
    }

    /// Only the statuses flagged active
    #[oai(path = "/estados-equipo/activos", method = "get")]
    async fn activos(&self, auth: BearerAuth) -> Result<Json<Vec<EstadoEquipoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let estados = self.app_data.estado_equipo_service.activos().await?;
        Ok(Json(estados.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/estados-equipo/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<EstadoEquipoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.estado_equipo_service.get(id.0).await?.into()))
    }

    #[oai(path = "/estados-equipo/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<EstadoEquipoRequest>,
    ) -> Result<Json<EstadoEquipoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.estado_equipo_service.update(id.0, &body.0).await?.into()))
    }

    #[oai(path = "/estados-equipo/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.estado_equipo_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Estado de equipo eliminado correctamente")))
    }

    /// Flip the active flag; deactivating a status in use is refused
    #[oai(path = "/estados-equipo/:id/toggle-activo", method = "patch")]
    async fn toggle_activo(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<EstadoEquipoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.estado_equipo_service.toggle_activo(id.0).await?.into()))
    }

    #[oai(path = "/estados-equipo/:id/equipos", method = "get")]
    async fn equipos(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<Vec<EquipoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let equipos = self.app_data.estado_equipo_service.equipos(id.0).await?;
        Ok(Json(equipos.into_iter().map(Into::into).collect()))
    }
}
