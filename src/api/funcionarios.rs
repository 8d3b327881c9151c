use std::sync::Arc;

use poem_openapi::param::{Path, Query};
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::api::{BearerAuth, Created, authenticate};
use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::reporte::{FuncionarioRequest, FuncionarioResponse};

#[derive(Tags)]
enum FuncionarioTags {
    /// Staff who take part in service reports
    Funcionarios,
}

pub struct FuncionariosApi {
    app_data: Arc<AppData>,
}

impl FuncionariosApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "FuncionarioTags::Funcionarios")]
impl FuncionariosApi {
    #[oai(path = "/funcionarios", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<FuncionarioRequest>,
    ) -> Result<Created<FuncionarioResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.funcionario_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/funcionarios", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<FuncionarioResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let funcionarios = self.app_data.funcionario_service.list().await?;
        Ok(Json(funcionarios.into_iter().map(Into::into).collect()))
    }

    /// Exact match on cedula, 404 when nobody has it
    #[oai(path = "/funcionarios/buscar", method = "get")]
    async fn buscar(&self, auth: BearerAuth, cedula: Query<String>) -> Result<Json<FuncionarioResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.funcionario_service.buscar_por_cedula(&cedula.0).await?.into()))
    }

    #[oai(path = "/funcionarios/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<FuncionarioResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.funcionario_service.get(id.0).await?.into()))
    }

    #[oai(path = "/funcionarios/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<FuncionarioRequest>,
    ) -> Result<Json<FuncionarioResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.funcionario_service.update(id.0, &body.0).await?.into()))
    }

    #[oai(path = "/funcionarios/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.funcionario_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Funcionario eliminado correctamente")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{admin_token, bearer, setup_test_app_data};
    use crate::types::catalog::{AreaFuncionario, TipoFuncionario};

    fn funcionario(cedula: &str) -> Json<FuncionarioRequest> {
        Json(FuncionarioRequest {
            nombre: " Carlos Angulo ".to_string(),
            cargo: "Técnico de soporte".to_string(),
            cedula: cedula.to_string(),
            tipo: TipoFuncionario::Contratista,
            area: AreaFuncionario::Sistemas,
        })
    }

    #[tokio::test]
    async fn test_create_trims_and_search_by_cedula() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let api = FuncionariosApi::new(app_data);

        let Created::Created(created) = api.create(bearer(&token), funcionario("1087111222")).await.unwrap();
        assert_eq!(created.nombre, "Carlos Angulo");

        let found = api
            .buscar(bearer(&token), Query("1087111222".to_string()))
            .await
            .unwrap();
        assert_eq!(found.id, created.id);

        let missing = api.buscar(bearer(&token), Query("000".to_string())).await;
        assert!(matches!(missing, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_duplicate_cedula_is_conflict_but_update_keeps_own() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let api = FuncionariosApi::new(app_data);

        let Created::Created(created) = api.create(bearer(&token), funcionario("1087333444")).await.unwrap();
        let duplicate = api.create(bearer(&token), funcionario("1087333444")).await;
        assert!(matches!(duplicate, Err(ApiError::Conflict(_))));

        let updated = api
            .update(bearer(&token), Path(created.id), funcionario("1087333444"))
            .await
            .unwrap();
        assert_eq!(updated.cedula, "1087333444");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let api = FuncionariosApi::new(app_data);

        let result = api.delete(bearer(&token), Path(42)).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
