use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::acceso_remoto::{self, Entity as AccesoRemoto};
use crate::types::dto::componentes::AccesoRemotoRequest;

/// Platform stored when the request leaves it blank
pub const PLATAFORMA_POR_DEFECTO: &str = "AnyDesk";

pub struct AccesoRemotoStore {
    db: DatabaseConnection,
}

impl AccesoRemotoStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn plataforma(data: &AccesoRemotoRequest) -> String {
        data.plataforma
            .clone()
            .unwrap_or_else(|| PLATAFORMA_POR_DEFECTO.to_string())
    }

    pub async fn create(&self, data: &AccesoRemotoRequest) -> Result<acceso_remoto::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = acceso_remoto::ActiveModel {
            equipo_id: Set(data.equipo_id),
            plataforma: Set(Self::plataforma(data)),
            usuario: Set(data.usuario.clone()),
            contrasena: Set(data.contrasena.clone()),
            id_conexion: Set(data.id_conexion.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::from_write("create_acceso_remoto", e))
    }

    pub async fn find_all(&self) -> Result<Vec<acceso_remoto::Model>, InternalError> {
        AccesoRemoto::find()
            .order_by_asc(acceso_remoto::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_accesos_remotos", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<acceso_remoto::Model, InternalError> {
        AccesoRemoto::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_acceso_remoto", e))?
            .ok_or_else(|| InventoryError::not_found("Acceso remoto", id).into())
    }

    pub async fn find_by_equipo(&self, equipo_id: i32) -> Result<Vec<acceso_remoto::Model>, InternalError> {
        AccesoRemoto::find()
            .filter(acceso_remoto::Column::EquipoId.eq(equipo_id))
            .order_by_asc(acceso_remoto::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_accesos_by_equipo", e))
    }

    pub async fn update(
        &self,
        id: i32,
        data: &AccesoRemotoRequest,
    ) -> Result<acceso_remoto::Model, InternalError> {
        let mut model = self.find_by_id(id).await?.into_active_model();
        model.equipo_id = Set(data.equipo_id);
        model.plataforma = Set(Self::plataforma(data));
        model.usuario = Set(data.usuario.clone());
        model.contrasena = Set(data.contrasena.clone());
        model.id_conexion = Set(data.id_conexion.clone());
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_acceso_remoto", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = AccesoRemoto::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_acceso_remoto", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Acceso remoto", id).into());
        }
        Ok(())
    }
}
