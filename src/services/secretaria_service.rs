use std::sync::Arc;

use crate::errors::{InternalError, InventoryError};
use crate::services::validation::{optional, required};
use crate::stores::SecretariaStore;
use crate::types::db::secretaria;
use crate::types::dto::organizacion::SecretariaRequest;

/// Business rules for secretarías
pub struct SecretariaService {
    store: Arc<SecretariaStore>,
}

impl SecretariaService {
    pub fn new(store: Arc<SecretariaStore>) -> Self {
        Self { store }
    }

    fn normalize(data: &SecretariaRequest) -> Result<SecretariaRequest, InternalError> {
        Ok(SecretariaRequest {
            nombre: required("nombre", &data.nombre)?,
            descripcion: required("descripcion", &data.descripcion)?,
            ubicacion: required("ubicacion", &data.ubicacion)?,
            secretario: required("secretario", &data.secretario)?,
            telefono: optional(&data.telefono),
        })
    }

    pub async fn create(&self, data: &SecretariaRequest) -> Result<secretaria::Model, InternalError> {
        let data = Self::normalize(data)?;
        let created = self.store.create(&data).await?;
        tracing::info!("Secretaria {} created: {}", created.id, created.nombre);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<secretaria::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<secretaria::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    pub async fn update(&self, id: i32, data: &SecretariaRequest) -> Result<secretaria::Model, InternalError> {
        let data = Self::normalize(data)?;
        self.store.update(id, &data).await
    }

    /// Delete a secretaría that no longer owns dependencias
    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.find_by_id(id).await?;

        if self.store.count_dependencias(id).await? > 0 {
            return Err(InventoryError::conflict(
                "No se puede eliminar la secretaría porque tiene dependencias asociadas",
            )
            .into());
        }

        self.store.delete(id).await?;
        tracing::info!("Secretaria {} deleted", id);
        Ok(())
    }
}
