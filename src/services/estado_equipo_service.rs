use std::sync::Arc;

use crate::errors::{InternalError, InventoryError};
use crate::services::validation::length_between;
use crate::stores::{EquipoStore, EstadoEquipoStore};
use crate::types::db::{equipo, estado_equipo};
use crate::types::dto::organizacion::EstadoEquipoRequest;

/// Business rules for equipment statuses
pub struct EstadoEquipoService {
    store: Arc<EstadoEquipoStore>,
    equipos: Arc<EquipoStore>,
}

impl EstadoEquipoService {
    pub fn new(store: Arc<EstadoEquipoStore>, equipos: Arc<EquipoStore>) -> Self {
        Self { store, equipos }
    }

    async fn check_nombre(&self, nombre: &str, current_id: Option<i32>) -> Result<(), InternalError> {
        if let Some(existing) = self.store.find_by_nombre(nombre).await? {
            if Some(existing.id) != current_id {
                return Err(InventoryError::duplicate(format!(
                    "Ya existe un estado de equipo con el nombre {}",
                    nombre
                ))
                .into());
            }
        }
        Ok(())
    }

    pub async fn create(&self, data: &EstadoEquipoRequest) -> Result<estado_equipo::Model, InternalError> {
        let nombre = length_between("nombre", &data.nombre, 3, 50)?;
        let descripcion = length_between("descripcion", &data.descripcion, 5, 255)?;
        self.check_nombre(&nombre, None).await?;

        let created = self
            .store
            .create(&nombre, &descripcion, data.activo.unwrap_or(true))
            .await?;
        tracing::info!("Estado de equipo {} created: {}", created.id, created.nombre);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<estado_equipo::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn activos(&self) -> Result<Vec<estado_equipo::Model>, InternalError> {
        self.store.find_activos().await
    }

    pub async fn get(&self, id: i32) -> Result<estado_equipo::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    /// Equipment currently in this status
    pub async fn equipos(&self, id: i32) -> Result<Vec<equipo::Model>, InternalError> {
        self.store.find_by_id(id).await?;
        self.equipos.find_by_estado(id).await
    }

    pub async fn update(&self, id: i32, data: &EstadoEquipoRequest) -> Result<estado_equipo::Model, InternalError> {
        let existing = self.store.find_by_id(id).await?;
        let nombre = length_between("nombre", &data.nombre, 3, 50)?;
        let descripcion = length_between("descripcion", &data.descripcion, 5, 255)?;
        self.check_nombre(&nombre, Some(id)).await?;

        self.store
            .update(id, &nombre, &descripcion, data.activo.unwrap_or(existing.activo))
            .await
    }

    /// Flip `activo`; a status in use cannot be deactivated
    pub async fn toggle_activo(&self, id: i32) -> Result<estado_equipo::Model, InternalError> {
        let existing = self.store.find_by_id(id).await?;

        if existing.activo && self.store.count_equipos(id).await? > 0 {
            return Err(InventoryError::conflict(
                "No se puede desactivar un estado que tiene equipos asociados",
            )
            .into());
        }

        self.store.set_activo(id, !existing.activo).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.find_by_id(id).await?;

        if self.store.count_equipos(id).await? > 0 {
            return Err(InventoryError::conflict(
                "No se puede eliminar un estado que tiene equipos asociados",
            )
            .into());
        }

        self.store.delete(id).await?;
        tracing::info!("Estado de equipo {} deleted", id);
        Ok(())
    }
}
