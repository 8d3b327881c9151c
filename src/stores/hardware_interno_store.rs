use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::hardware_interno::{self, Entity as HardwareInterno};
use crate::types::dto::componentes::HardwareInternoRequest;

pub struct HardwareInternoStore {
    db: DatabaseConnection,
}

impl HardwareInternoStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        data: &HardwareInternoRequest,
    ) -> Result<hardware_interno::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = hardware_interno::ActiveModel {
            equipo_id: Set(data.equipo_id),
            componente: Set(data.componente),
            tecnologia: Set(data.tecnologia.clone()),
            capacidad: Set(data.capacidad.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::from_write("create_hardware_interno", e))
    }

    pub async fn find_all(&self) -> Result<Vec<hardware_interno::Model>, InternalError> {
        HardwareInterno::find()
            .order_by_asc(hardware_interno::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_hardware_interno", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<hardware_interno::Model, InternalError> {
        HardwareInterno::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_hardware_interno_by_id", e))?
            .ok_or_else(|| InventoryError::not_found("Hardware interno", id).into())
    }

    pub async fn find_by_equipo(&self, equipo_id: i32) -> Result<Vec<hardware_interno::Model>, InternalError> {
        HardwareInterno::find()
            .filter(hardware_interno::Column::EquipoId.eq(equipo_id))
            .order_by_asc(hardware_interno::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_hardware_by_equipo", e))
    }

    pub async fn update(
        &self,
        id: i32,
        data: &HardwareInternoRequest,
    ) -> Result<hardware_interno::Model, InternalError> {
        let mut model = self.find_by_id(id).await?.into_active_model();
        model.equipo_id = Set(data.equipo_id);
        model.componente = Set(data.componente);
        model.tecnologia = Set(data.tecnologia.clone());
        model.capacidad = Set(data.capacidad.clone());
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_hardware_interno", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = HardwareInterno::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_hardware_interno", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Hardware interno", id).into());
        }
        Ok(())
    }
}
