use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::periferico::{self, Entity as Periferico};
use crate::types::dto::componentes::PerifericoRequest;

pub struct PerifericoStore {
    db: DatabaseConnection,
}

impl PerifericoStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, data: &PerifericoRequest) -> Result<periferico::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = periferico::ActiveModel {
            equipo_id: Set(data.equipo_id),
            tipo_periferico: Set(data.tipo_periferico),
            placa_inventario: Set(data.placa_inventario.clone()),
            marca: Set(data.marca.clone()),
            serial: Set(data.serial.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::from_write("create_periferico", e))
    }

    pub async fn find_all(&self) -> Result<Vec<periferico::Model>, InternalError> {
        Periferico::find()
            .order_by_asc(periferico::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_perifericos", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<periferico::Model, InternalError> {
        Periferico::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_periferico", e))?
            .ok_or_else(|| InventoryError::not_found("Periférico", id).into())
    }

    pub async fn find_by_equipo(&self, equipo_id: i32) -> Result<Vec<periferico::Model>, InternalError> {
        Periferico::find()
            .filter(periferico::Column::EquipoId.eq(equipo_id))
            .order_by_asc(periferico::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_perifericos_by_equipo", e))
    }

    pub async fn update(&self, id: i32, data: &PerifericoRequest) -> Result<periferico::Model, InternalError> {
        let mut model = self.find_by_id(id).await?.into_active_model();
        model.equipo_id = Set(data.equipo_id);
        model.tipo_periferico = Set(data.tipo_periferico);
        model.placa_inventario = Set(data.placa_inventario.clone());
        model.marca = Set(data.marca.clone());
        model.serial = Set(data.serial.clone());
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_periferico", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = Periferico::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_periferico", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Periférico", id).into());
        }
        Ok(())
    }
}
