use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::backup::{self, Entity as Backup};
use crate::types::dto::componentes::BackupRequest;

pub struct BackupStore {
    db: DatabaseConnection,
}

impl BackupStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, data: &BackupRequest) -> Result<backup::Model, InternalError> {
        let now = Utc::now();
        let model = backup::ActiveModel {
            equipo_id: Set(data.equipo_id),
            fecha: Set(data.fecha.unwrap_or(now)),
            num_carpetas: Set(data.num_carpetas),
            peso_total_archivos: Set(data.peso_total_archivos.clone()),
            ruta_backup: Set(data.ruta_backup.clone()),
            se_realizo_backup: Set(data.se_realizo_backup),
            created_at: Set(now.timestamp()),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::from_write("create_backup", e))
    }

    pub async fn find_all(&self) -> Result<Vec<backup::Model>, InternalError> {
        Backup::find()
            .order_by_desc(backup::Column::Fecha)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_backups", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<backup::Model, InternalError> {
        Backup::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_backup", e))?
            .ok_or_else(|| InventoryError::not_found("Backup", id).into())
    }

    /// Backups of an equipment, newest first
    pub async fn find_by_equipo(&self, equipo_id: i32) -> Result<Vec<backup::Model>, InternalError> {
        Backup::find()
            .filter(backup::Column::EquipoId.eq(equipo_id))
            .order_by_desc(backup::Column::Fecha)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_backups_by_equipo", e))
    }

    pub async fn update(&self, id: i32, data: &BackupRequest) -> Result<backup::Model, InternalError> {
        let existing = self.find_by_id(id).await?;
        let fecha = data.fecha.unwrap_or(existing.fecha);

        let mut model = existing.into_active_model();
        model.equipo_id = Set(data.equipo_id);
        model.fecha = Set(fecha);
        model.num_carpetas = Set(data.num_carpetas);
        model.peso_total_archivos = Set(data.peso_total_archivos.clone());
        model.ruta_backup = Set(data.ruta_backup.clone());
        model.se_realizo_backup = Set(data.se_realizo_backup);
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_backup", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = Backup::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_backup", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Backup", id).into());
        }
        Ok(())
    }
}
