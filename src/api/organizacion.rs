use std::sync::Arc;

use poem_openapi::param::{Path, Query};
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::api::{BearerAuth, Created, authenticate};
use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::organizacion::{
    DependenciaRequest, DependenciaResponse, SecretariaRequest, SecretariaResponse,
    UsuarioResponsableRequest, UsuarioResponsableResponse,
};

/// API tags for the organisational hierarchy
#[derive(Tags)]
enum OrganizacionTags {
    /// Secretarías of the municipality
    Secretarias,
    /// Departments inside a secretaría
    Dependencias,
    /// People responsible for equipment
    UsuariosResponsables,
}

pub struct SecretariasApi {
    app_data: Arc<AppData>,
}

impl SecretariasApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "OrganizacionTags::Secretarias")]
impl SecretariasApi {
    #[oai(path = "/secretarias", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<SecretariaRequest>,
    ) -> Result<Created<SecretariaResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.secretaria_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/secretarias", method = "get")]
    pub(crate) async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<SecretariaResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let secretarias = self.app_data.secretaria_service.list().await?;
        Ok(Json(secretarias.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/secretarias/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<SecretariaResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.secretaria_service.get(id.0).await?.into()))
    }

    #[oai(path = "/secretarias/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<SecretariaRequest>,
    ) -> Result<Json<SecretariaResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.secretaria_service.update(id.0, &body.0).await?.into()))
    }

    /// Refused with 409 while the secretaría still has dependencias
    #[oai(path = "/secretarias/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.secretaria_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Secretaría eliminada correctamente")))
    }

    /// Dependencias of a secretaría
    #[oai(path = "/secretarias/:id/dependencias", method = "get")]
    async fn dependencias(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<Vec<DependenciaResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let dependencias = self.app_data.dependencia_service.list_by_secretaria(id.0).await?;
        Ok(Json(dependencias.into_iter().map(Into::into).collect()))
    }
}

pub struct DependenciasApi {
    app_data: Arc<AppData>,
}

impl DependenciasApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "OrganizacionTags::Dependencias")]
impl DependenciasApi {
    #[oai(path = "/dependencias", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<DependenciaRequest>,
    ) -> Result<Created<DependenciaResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.dependencia_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/dependencias", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<DependenciaResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let dependencias = self.app_data.dependencia_service.list().await?;
        Ok(Json(dependencias.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/dependencias/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<DependenciaResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.dependencia_service.get(id.0).await?.into()))
    }

    #[oai(path = "/dependencias/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<DependenciaRequest>,
    ) -> Result<Json<DependenciaResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.dependencia_service.update(id.0, &body.0).await?.into()))
    }

    #[oai(path = "/dependencias/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.dependencia_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Dependencia eliminada correctamente")))
    }

    /// Responsible users working in a dependencia
    #[oai(path = "/dependencias/:id/usuarios", method = "get")]
    async fn usuarios(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<Vec<UsuarioResponsableResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let usuarios = self.app_data.dependencia_service.usuarios(id.0).await?;
        Ok(Json(usuarios.into_iter().map(Into::into).collect()))
    }
}

pub struct UsuariosResponsablesApi {
    app_data: Arc<AppData>,
}

impl UsuariosResponsablesApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "OrganizacionTags::UsuariosResponsables")]
impl UsuariosResponsablesApi {
    #[oai(path = "/usuarios-responsables", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<UsuarioResponsableRequest>,
    ) -> Result<Created<UsuarioResponsableResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.usuario_responsable_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/usuarios-responsables", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<UsuarioResponsableResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let usuarios = self.app_data.usuario_responsable_service.list().await?;
        Ok(Json(usuarios.into_iter().map(Into::into).collect()))
    }

    /// Find a responsible user by cedula
    #[oai(path = "/usuarios-responsables/buscar", method = "get")]
    async fn buscar(
        &self,
        auth: BearerAuth,
        cedula: Query<String>,
    ) -> Result<Json<UsuarioResponsableResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let usuario = self
            .app_data
            .usuario_responsable_service
            .buscar_por_cedula(&cedula.0)
            .await?;
        Ok(Json(usuario.into()))
    }

    #[oai(path = "/usuarios-responsables/:id", method = "get")]
    async fn get(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<UsuarioResponsableResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.usuario_responsable_service.get(id.0).await?.into()))
    }

    #[oai(path = "/usuarios-responsables/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UsuarioResponsableRequest>,
    ) -> Result<Json<UsuarioResponsableResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let updated = self
            .app_data
            .usuario_responsable_service
            .update(id.0, &body.0)
            .await?;
        Ok(Json(updated.into()))
    }

    #[oai(path = "/usuarios-responsables/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.usuario_responsable_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Usuario responsable eliminado correctamente")))
    }

    /// Responsible users of dependencia `{id}`
    #[oai(path = "/usuarios-responsables/:id/dependencia", method = "get")]
    async fn por_dependencia(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<Vec<UsuarioResponsableResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let usuarios = self
            .app_data
            .usuario_responsable_service
            .list_by_dependencia(id.0)
            .await?;
        Ok(Json(usuarios.into_iter().map(Into::into).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{admin_token, bearer, setup_test_app_data};

    fn secretaria(nombre: &str) -> Json<SecretariaRequest> {
        Json(SecretariaRequest {
            nombre: nombre.to_string(),
            descripcion: "Gestión administrativa".to_string(),
            ubicacion: "Palacio municipal".to_string(),
            secretario: "Ana Castillo".to_string(),
            telefono: None,
        })
    }

    fn dependencia(secretaria_id: i32) -> Json<DependenciaRequest> {
        Json(DependenciaRequest {
            secretaria_id,
            nombre: "Oficina de Sistemas".to_string(),
            descripcion: "Soporte tecnológico".to_string(),
            ubicacion_oficina: "Piso 3".to_string(),
            jefe_oficina: "Luis Preciado".to_string(),
            correo_institucional: "sistemas@tumaco.gov.co".to_string(),
            telefono: None,
        })
    }

    #[tokio::test]
    async fn test_secretaria_crud_and_delete_guard() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let secretarias = SecretariasApi::new(app_data.clone());
        let dependencias = DependenciasApi::new(app_data.clone());

        let Created::Created(created) = secretarias.create(bearer(&token), secretaria("General")).await.unwrap();
        assert_eq!(created.nombre, "General");

        let Created::Created(dep) = dependencias
            .create(bearer(&token), dependencia(created.id))
            .await
            .unwrap();

        let listed = secretarias.dependencias(bearer(&token), Path(created.id)).await.unwrap();
        assert_eq!(listed.len(), 1);

        let blocked = secretarias.delete(bearer(&token), Path(created.id)).await;
        assert!(matches!(blocked, Err(ApiError::Conflict(_))));

        dependencias.delete(bearer(&token), Path(dep.id)).await.unwrap();
        secretarias.delete(bearer(&token), Path(created.id)).await.unwrap();

        let missing = secretarias.get(bearer(&token), Path(created.id)).await;
        assert!(matches!(missing, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_blank_required_field_is_bad_request() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let api = SecretariasApi::new(app_data);

        let result = api.create(bearer(&token), secretaria("   ")).await;

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_dependencia_with_unknown_secretaria_is_bad_request() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let api = DependenciasApi::new(app_data);

        let result = api.create(bearer(&token), dependencia(404)).await;

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_responsable_duplicate_cedula_and_search() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let secretarias = SecretariasApi::new(app_data.clone());
        let dependencias = DependenciasApi::new(app_data.clone());
        let api = UsuariosResponsablesApi::new(app_data);

        let Created::Created(sec) = secretarias.create(bearer(&token), secretaria("Hacienda")).await.unwrap();
        let Created::Created(dep) = dependencias.create(bearer(&token), dependencia(sec.id)).await.unwrap();
        let request = UsuarioResponsableRequest {
            dependencia_id: dep.id,
            nombres_apellidos: "Pedro Angulo".to_string(),
            cedula: "1087123456".to_string(),
            correo_personal: None,
            tipo_vinculacion: None,
            celular: None,
        };

        api.create(bearer(&token), Json(request.clone())).await.unwrap();
        let duplicate = api.create(bearer(&token), Json(request)).await;
        assert!(matches!(duplicate, Err(ApiError::Conflict(_))));

        let found = api.buscar(bearer(&token), Query("1087123456".to_string())).await.unwrap();
        assert_eq!(found.nombres_apellidos, "Pedro Angulo");

        let missing = api.buscar(bearer(&token), Query("0000".to_string())).await;
        assert!(matches!(missing, Err(ApiError::NotFound(_))));

        let by_dep = api.por_dependencia(bearer(&token), Path(dep.id)).await.unwrap();
        assert_eq!(by_dep.len(), 1);
    }

    #[tokio::test]
    async fn test_dependencia_with_responsables_cannot_be_deleted() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let secretarias = SecretariasApi::new(app_data.clone());
        let dependencias = DependenciasApi::new(app_data.clone());
        let responsables = UsuariosResponsablesApi::new(app_data);

        let Created::Created(sec) = secretarias.create(bearer(&token), secretaria("Salud")).await.unwrap();
        let Created::Created(dep) = dependencias.create(bearer(&token), dependencia(sec.id)).await.unwrap();
        let Created::Created(responsable) = responsables
            .create(
                bearer(&token),
                Json(UsuarioResponsableRequest {
                    dependencia_id: dep.id,
                    nombres_apellidos: "Rosa Estupiñán".to_string(),
                    cedula: "1087999888".to_string(),
                    correo_personal: None,
                    tipo_vinculacion: None,
                    celular: None,
                }),
            )
            .await
            .unwrap();

        let blocked = dependencias.delete(bearer(&token), Path(dep.id)).await;
        assert!(matches!(blocked, Err(ApiError::Conflict(_))));
        assert!(dependencias.get(bearer(&token), Path(dep.id)).await.is_ok());

        responsables.delete(bearer(&token), Path(responsable.id)).await.unwrap();
        dependencias.delete(bearer(&token), Path(dep.id)).await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthorized() {
        let app_data = setup_test_app_data().await;
        let api = SecretariasApi::new(app_data);
        let result = api.list(bearer("invalido")).await;

        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }
}
