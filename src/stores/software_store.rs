use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::software::{self, Entity as Software};
use crate::types::dto::componentes::SoftwareRequest;

pub struct SoftwareStore {
    db: DatabaseConnection,
}

impl SoftwareStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, data: &SoftwareRequest) -> Result<software::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = software::ActiveModel {
            equipo_id: Set(data.equipo_id),
            nombre: Set(data.nombre.clone()),
            version: Set(data.version.clone()),
            tipo_licencia: Set(data.tipo_licencia.clone()),
            categoria: Set(data.categoria),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::from_write("create_software", e))
    }

    pub async fn find_all(&self) -> Result<Vec<software::Model>, InternalError> {
        Software::find()
            .order_by_asc(software::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_software", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<software::Model, InternalError> {
        Software::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_software_by_id", e))?
            .ok_or_else(|| InventoryError::not_found("Software", id).into())
    }

    pub async fn find_by_equipo(&self, equipo_id: i32) -> Result<Vec<software::Model>, InternalError> {
        Software::find()
            .filter(software::Column::EquipoId.eq(equipo_id))
            .order_by_asc(software::Column::Nombre)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_software_by_equipo", e))
    }

    pub async fn update(&self, id: i32, data: &SoftwareRequest) -> Result<software::Model, InternalError> {
        let mut model = self.find_by_id(id).await?.into_active_model();
        model.equipo_id = Set(data.equipo_id);
        model.nombre = Set(data.nombre.clone());
        model.version = Set(data.version.clone());
        model.tipo_licencia = Set(data.tipo_licencia.clone());
        model.categoria = Set(data.categoria);
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_software", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = Software::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_software", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Software", id).into());
        }
        Ok(())
    }
}
