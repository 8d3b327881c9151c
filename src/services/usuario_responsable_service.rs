use std::sync::Arc;

use crate::errors::{InternalError, InventoryError};
use crate::services::validation::{optional, reference, required};
use crate::stores::{DependenciaStore, UsuarioResponsableStore};
use crate::types::db::usuario_responsable;
use crate::types::dto::organizacion::UsuarioResponsableRequest;

/// Business rules for the people responsible for equipment
pub struct UsuarioResponsableService {
    store: Arc<UsuarioResponsableStore>,
    dependencias: Arc<DependenciaStore>,
}

impl UsuarioResponsableService {
    pub fn new(store: Arc<UsuarioResponsableStore>, dependencias: Arc<DependenciaStore>) -> Self {
        Self { store, dependencias }
    }

    /// Normalize the body and check references and cedula uniqueness
    ///
    /// `current_id` is the row being updated, which may keep its own cedula.
    async fn normalize(
        &self,
        data: &UsuarioResponsableRequest,
        current_id: Option<i32>,
    ) -> Result<UsuarioResponsableRequest, InternalError> {
        let normalized = UsuarioResponsableRequest {
            dependencia_id: data.dependencia_id,
            nombres_apellidos: required("nombres_apellidos", &data.nombres_apellidos)?,
            cedula: required("cedula", &data.cedula)?,
            correo_personal: optional(&data.correo_personal),
            tipo_vinculacion: data.tipo_vinculacion,
            celular: optional(&data.celular),
        };

        reference(
            self.dependencias.exists(normalized.dependencia_id).await?,
            "La dependencia especificada no existe",
        )?;

        if let Some(existing) = self.store.find_by_cedula(&normalized.cedula).await? {
            if Some(existing.id) != current_id {
                tracing::debug!("Duplicate cedula for usuario responsable");
                return Err(InventoryError::duplicate(format!(
                    "Ya existe un usuario responsable con la cédula {}",
                    normalized.cedula
                ))
                .into());
            }
        }

        Ok(normalized)
    }

    pub async fn create(
        &self,
        data: &UsuarioResponsableRequest,
    ) -> Result<usuario_responsable::Model, InternalError> {
        let data = self.normalize(data, None).await?;
        let created = self.store.create(&data).await?;
        tracing::info!("Usuario responsable {} created", created.id);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<usuario_responsable::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<usuario_responsable::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    pub async fn buscar_por_cedula(&self, cedula: &str) -> Result<usuario_responsable::Model, InternalError> {
        let cedula = required("cedula", cedula)?;
        self.store.find_by_cedula(&cedula).await?.ok_or_else(|| {
            InventoryError::NotFoundBy(format!(
                "No se encontró un usuario responsable con la cédula {}",
                cedula
            ))
            .into()
        })
    }

    pub async fn list_by_dependencia(
        &self,
        dependencia_id: i32,
    ) -> Result<Vec<usuario_responsable::Model>, InternalError> {
        self.dependencias.find_by_id(dependencia_id).await?;
        self.store.find_by_dependencia(dependencia_id).await
    }

    pub async fn update(
        &self,
        id: i32,
        data: &UsuarioResponsableRequest,
    ) -> Result<usuario_responsable::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let data = self.normalize(data, Some(id)).await?;
        self.store.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.delete(id).await?;
        tracing::info!("Usuario responsable {} deleted", id);
        Ok(())
    }
}
