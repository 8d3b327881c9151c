use std::sync::Arc;

use crate::errors::{InternalError, InventoryError};
use crate::services::validation::{optional, reference, required};
use crate::stores::{DependenciaStore, EquipoConHijos, EquipoStore, EstadoEquipoStore, UsuarioResponsableStore};
use crate::types::db::equipo;
use crate::types::dto::equipo::{EquipoRequest, HojaVidaResponse};

/// Business rules for equipment
pub struct EquipoService {
    store: Arc<EquipoStore>,
    usuarios: Arc<UsuarioResponsableStore>,
    estados: Arc<EstadoEquipoStore>,
    dependencias: Arc<DependenciaStore>,
}

impl EquipoService {
    pub fn new(
        store: Arc<EquipoStore>,
        usuarios: Arc<UsuarioResponsableStore>,
        estados: Arc<EstadoEquipoStore>,
        dependencias: Arc<DependenciaStore>,
    ) -> Self {
        Self {
            store,
            usuarios,
            estados,
            dependencias,
        }
    }

    /// Normalize the body, then check references and the unique serial/placa
    ///
    /// `current_id` is the equipment being updated, which may keep its own values.
    async fn normalize(&self, data: &EquipoRequest, current_id: Option<i32>) -> Result<EquipoRequest, InternalError> {
        let normalized = EquipoRequest {
            usuario_responsable_id: data.usuario_responsable_id,
            estado_equipo_id: data.estado_equipo_id,
            tipo_dispositivo: data.tipo_dispositivo,
            placa_inventario: optional(&data.placa_inventario),
            marca: required("marca", &data.marca)?,
            serial: required("serial", &data.serial)?,
            modelo: optional(&data.modelo),
            fecha_diligenciamiento: data.fecha_diligenciamiento,
            observaciones_generales: optional(&data.observaciones_generales),
        };

        if let Some(usuario_id) = normalized.usuario_responsable_id {
            reference(
                self.usuarios.exists(usuario_id).await?,
                "El usuario responsable especificado no existe",
            )?;
        }
        if let Some(estado_id) = normalized.estado_equipo_id {
            reference(
                self.estados.exists(estado_id).await?,
                "El estado de equipo especificado no existe",
            )?;
        }

        if let Some(existing) = self.store.find_by_serial(&normalized.serial).await? {
            if Some(existing.id) != current_id {
                return Err(InventoryError::duplicate(format!(
                    "Ya existe un equipo con el serial {}",
                    normalized.serial
                ))
                .into());
            }
        }
        if let Some(placa) = &normalized.placa_inventario {
            if let Some(existing) = self.store.find_by_placa(placa).await? {
                if Some(existing.id) != current_id {
                    return Err(InventoryError::duplicate(format!(
                        "Ya existe un equipo con la placa de inventario {}",
                        placa
                    ))
                    .into());
                }
            }
        }

        Ok(normalized)
    }

    pub async fn create(&self, data: &EquipoRequest) -> Result<equipo::Model, InternalError> {
        let data = self.normalize(data, None).await?;
        let created = self.store.create(&data).await?;
        tracing::info!("Equipo {} created with serial {}", created.id, created.serial);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<equipo::Model>, InternalError> {
        self.store.find_all().await
    }

    /// The equipment with all of its child collections
    pub async fn get_completo(&self, id: i32) -> Result<EquipoConHijos, InternalError> {
        self.store.find_con_hijos(id).await
    }

    /// Equipment whose responsible user belongs to the dependencia
    pub async fn list_by_dependencia(&self, dependencia_id: i32) -> Result<Vec<equipo::Model>, InternalError> {
        self.dependencias.find_by_id(dependencia_id).await?;
        self.store.find_by_dependencia(dependencia_id).await
    }

    pub async fn hoja_vida(&self, id: i32) -> Result<HojaVidaResponse, InternalError> {
        self.store
            .hojas_de_vida(Some(id))
            .await?
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or_else(|| InventoryError::not_found("Equipo", id).into())
    }

    pub async fn hojas_de_vida(&self) -> Result<Vec<HojaVidaResponse>, InternalError> {
        Ok(self
            .store
            .hojas_de_vida(None)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn update(&self, id: i32, data: &EquipoRequest) -> Result<equipo::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let data = self.normalize(data, Some(id)).await?;
        self.store.update(id, &data).await
    }

    /// Delete the equipment; children cascade and service reports are detached
    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.delete(id).await?;
        tracing::info!("Equipo {} deleted", id);
        Ok(())
    }

    /// 404 unless the equipment exists
    pub async fn ensure_exists(&self, id: i32) -> Result<(), InternalError> {
        if self.store.exists(id).await? {
            Ok(())
        } else {
            Err(InventoryError::not_found("Equipo", id).into())
        }
    }
}
