use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::configuracion_red::{self, Entity as ConfiguracionRed};
use crate::types::dto::componentes::ConfiguracionRedRequest;

pub struct ConfiguracionRedStore {
    db: DatabaseConnection,
}

impl ConfiguracionRedStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        data: &ConfiguracionRedRequest,
    ) -> Result<configuracion_red::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = configuracion_red::ActiveModel {
            equipo_id: Set(data.equipo_id),
            direccion_ip: Set(data.direccion_ip.clone()),
            asignacion_ip: Set(data.asignacion_ip),
            nombre_dispositivo: Set(data.nombre_dispositivo.clone()),
            conectividad: Set(data.conectividad.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::from_write("create_configuracion_red", e))
    }

    pub async fn find_all(&self) -> Result<Vec<configuracion_red::Model>, InternalError> {
        ConfiguracionRed::find()
            .order_by_asc(configuracion_red::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_configuraciones_red", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<configuracion_red::Model, InternalError> {
        ConfiguracionRed::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_configuracion_red", e))?
            .ok_or_else(|| InventoryError::not_found("Configuración de red", id).into())
    }

    /// The configuration of an equipment, if it has one
    pub async fn find_by_equipo(
        &self,
        equipo_id: i32,
    ) -> Result<Option<configuracion_red::Model>, InternalError> {
        ConfiguracionRed::find()
            .filter(configuracion_red::Column::EquipoId.eq(equipo_id))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_configuracion_by_equipo", e))
    }

    pub async fn update(
        &self,
        id: i32,
        data: &ConfiguracionRedRequest,
    ) -> Result<configuracion_red::Model, InternalError> {
        let mut model = self.find_by_id(id).await?.into_active_model();
        model.equipo_id = Set(data.equipo_id);
        model.direccion_ip = Set(data.direccion_ip.clone());
        model.asignacion_ip = Set(data.asignacion_ip);
        model.nombre_dispositivo = Set(data.nombre_dispositivo.clone());
        model.conectividad = Set(data.conectividad.clone());
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_configuracion_red", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = ConfiguracionRed::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_configuracion_red", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Configuración de red", id).into());
        }
        Ok(())
    }
}
