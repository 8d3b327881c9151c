use std::sync::Arc;

use crate::errors::{InternalError, InventoryError};
use crate::services::validation::required;
use crate::stores::FuncionarioStore;
use crate::types::db::funcionario;
use crate::types::dto::reporte::FuncionarioRequest;

/// Staff that take part in service reports
pub struct FuncionarioService {
    store: Arc<FuncionarioStore>,
}

impl FuncionarioService {
    pub fn new(store: Arc<FuncionarioStore>) -> Self {
        Self { store }
    }

    async fn normalize(
        &self,
        data: &FuncionarioRequest,
        current_id: Option<i32>,
    ) -> Result<FuncionarioRequest, InternalError> {
        let normalized = FuncionarioRequest {
            nombre: required("nombre", &data.nombre)?,
            cargo: required("cargo", &data.cargo)?,
            cedula: required("cedula", &data.cedula)?,
            tipo: data.tipo,
            area: data.area,
        };

        if let Some(existing) = self.store.find_by_cedula(&normalized.cedula).await? {
            if Some(existing.id) != current_id {
                tracing::debug!("Duplicate cedula for funcionario");
                return Err(InventoryError::duplicate(format!(
                    "Ya existe un funcionario con la cédula {}",
                    normalized.cedula
                ))
                .into());
            }
        }

        Ok(normalized)
    }

    pub async fn create(&self, data: &FuncionarioRequest) -> Result<funcionario::Model, InternalError> {
        let data = self.normalize(data, None).await?;
        let created = self.store.create(&data).await?;
        tracing::info!("Funcionario {} created", created.id);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<funcionario::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<funcionario::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    pub async fn buscar_por_cedula(&self, cedula: &str) -> Result<funcionario::Model, InternalError> {
        let cedula = required("cedula", cedula)?;
        self.store.find_by_cedula(&cedula).await?.ok_or_else(|| {
            InventoryError::NotFoundBy(format!("No se encontró un funcionario con la cédula {}", cedula))
                .into()
        })
    }

    /// Staff linked to a report; 404 when the report does not exist
    pub async fn list_by_reporte(&self, reporte_id: i32) -> Result<Vec<funcionario::Model>, InternalError> {
        self.store.find_by_reporte(reporte_id).await
    }

    pub async fn update(&self, id: i32, data: &FuncionarioRequest) -> Result<funcionario::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let data = self.normalize(data, Some(id)).await?;
        self.store.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.delete(id).await?;
        tracing::info!("Funcionario {} deleted", id);
        Ok(())
    }
}
