use std::sync::Arc;

use crate::errors::{InternalError, InventoryError};
use crate::services::validation::{optional, reference, required};
use crate::stores::{DependenciaStore, SecretariaStore, UsuarioResponsableStore};
use crate::types::db::{dependencia, usuario_responsable};
use crate::types::dto::organizacion::DependenciaRequest;

/// Business rules for dependencias
pub struct DependenciaService {
    store: Arc<DependenciaStore>,
    secretarias: Arc<SecretariaStore>,
    usuarios: Arc<UsuarioResponsableStore>,
}

impl DependenciaService {
    pub fn new(
        store: Arc<DependenciaStore>,
        secretarias: Arc<SecretariaStore>,
        usuarios: Arc<UsuarioResponsableStore>,
    ) -> Self {
        Self {
            store,
            secretarias,
            usuarios,
        }
    }

    async fn normalize(&self, data: &DependenciaRequest) -> Result<DependenciaRequest, InternalError> {
        let normalized = DependenciaRequest {
            secretaria_id: data.secretaria_id,
            nombre: required("nombre", &data.nombre)?,
            descripcion: required("descripcion", &data.descripcion)?,
            ubicacion_oficina: required("ubicacion_oficina", &data.ubicacion_oficina)?,
            jefe_oficina: required("jefe_oficina", &data.jefe_oficina)?,
            correo_institucional: required("correo_institucional", &data.correo_institucional)?,
            telefono: optional(&data.telefono),
        };

        reference(
            self.secretarias.exists(normalized.secretaria_id).await?,
            "La secretaría especificada no existe",
        )?;

        Ok(normalized)
    }

    pub async fn create(&self, data: &DependenciaRequest) -> Result<dependencia::Model, InternalError> {
        let data = self.normalize(data).await?;
        let created = self.store.create(&data).await?;
        tracing::info!("Dependencia {} created in secretaria {}", created.id, created.secretaria_id);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<dependencia::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<dependencia::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    /// Dependencias of a secretaría; 404 when the secretaría is unknown
    pub async fn list_by_secretaria(&self, secretaria_id: i32) -> Result<Vec<dependencia::Model>, InternalError> {
        self.secretarias.find_by_id(secretaria_id).await?;
        self.store.find_by_secretaria(secretaria_id).await
    }

    /// Responsible users working in a dependencia
    pub async fn usuarios(&self, id: i32) -> Result<Vec<usuario_responsable::Model>, InternalError> {
        self.store.find_by_id(id).await?;
        self.usuarios.find_by_dependencia(id).await
    }

    pub async fn update(&self, id: i32, data: &DependenciaRequest) -> Result<dependencia::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let data = self.normalize(data).await?;
        self.store.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.find_by_id(id).await?;

        if self.store.count_usuarios(id).await? > 0 {
            return Err(InventoryError::conflict(
                "No se puede eliminar la dependencia porque tiene usuarios responsables asociados",
            )
            .into());
        }

        self.store.delete(id).await?;
        tracing::info!("Dependencia {} deleted", id);
        Ok(())
    }
}
