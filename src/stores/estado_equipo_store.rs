use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::equipo;
use crate::types::db::estado_equipo::{self, Entity as EstadoEquipo};

/// Data access for equipment statuses
pub struct EstadoEquipoStore {
    db: DatabaseConnection,
}

impl EstadoEquipoStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        nombre: &str,
        descripcion: &str,
        activo: bool,
    ) -> Result<estado_equipo::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = estado_equipo::ActiveModel {
            nombre: Set(nombre.to_string()),
            descripcion: Set(descripcion.to_string()),
            activo: Set(activo),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::from_write("create_estado_equipo", e))
    }

    pub async fn find_all(&self) -> Result<Vec<estado_equipo::Model>, InternalError> {
        EstadoEquipo::find()
            .order_by_asc(estado_equipo::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_estados_equipo", e))
    }

    pub async fn find_activos(&self) -> Result<Vec<estado_equipo::Model>, InternalError> {
        EstadoEquipo::find()
            .filter(estado_equipo::Column::Activo.eq(true))
            .order_by_asc(estado_equipo::Column::Nombre)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_estados_activos", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<estado_equipo::Model, InternalError> {
        EstadoEquipo::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_estado_equipo", e))?
            .ok_or_else(|| InventoryError::not_found("Estado de equipo", id).into())
    }

    pub async fn find_by_nombre(&self, nombre: &str) -> Result<Option<estado_equipo::Model>, InternalError> {
        EstadoEquipo::find()
            .filter(estado_equipo::Column::Nombre.eq(nombre))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_estado_by_nombre", e))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, InternalError> {
        let count = EstadoEquipo::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("estado_equipo_exists", e))?;
        Ok(count > 0)
    }

    pub async fn update(
        &self,
        id: i32,
        nombre: &str,
        descripcion: &str,
        activo: bool,
    ) -> Result<estado_equipo::Model, InternalError> {
        let mut model = self.find_by_id(id).await?.into_active_model();
        model.nombre = Set(nombre.to_string());
        model.descripcion = Set(descripcion.to_string());
        model.activo = Set(activo);
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_estado_equipo", e))
    }

    pub async fn set_activo(&self, id: i32, activo: bool) -> Result<estado_equipo::Model, InternalError> {
        let mut model = self.find_by_id(id).await?.into_active_model();
        model.activo = Set(activo);
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("toggle_estado_equipo", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = EstadoEquipo::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_estado_equipo", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Estado de equipo", id).into());
        }
        Ok(())
    }

    pub async fn count_equipos(&self, id: i32) -> Result<u64, InternalError> {
        equipo::Entity::find()
            .filter(equipo::Column::EstadoEquipoId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_equipos_by_estado", e))
    }
}
