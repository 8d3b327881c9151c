use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::dependencia;
use crate::types::db::secretaria::{self, Entity as Secretaria};
use crate::types::dto::organizacion::SecretariaRequest;

/// Data access for secretarías
pub struct SecretariaStore {
    db: DatabaseConnection,
}

impl SecretariaStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a secretaría
    ///
    /// # Arguments
    /// * `data` - Validated request body
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored row with its generated id
    pub async fn create(&self, data: &SecretariaRequest) -> Result<secretaria::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = secretaria::ActiveModel {
            nombre: Set(data.nombre.clone()),
            descripcion: Set(data.descripcion.clone()),
            ubicacion: Set(data.ubicacion.clone()),
            secretario: Set(data.secretario.clone()),
            telefono: Set(data.telefono.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::from_write("create_secretaria", e))
    }

    pub async fn find_all(&self) -> Result<Vec<secretaria::Model>, InternalError> {
        Secretaria::find()
            .order_by_asc(secretaria::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_secretarias", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<secretaria::Model, InternalError> {
        Secretaria::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_secretaria", e))?
            .ok_or_else(|| InventoryError::not_found("Secretaria", id).into())
    }

    pub async fn find_by_nombre(&self, nombre: &str) -> Result<Option<secretaria::Model>, InternalError> {
        Secretaria::find()
            .filter(secretaria::Column::Nombre.eq(nombre))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_secretaria_by_nombre", e))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, InternalError> {
        let count = Secretaria::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("secretaria_exists", e))?;
        Ok(count > 0)
    }

    /// Replace every editable field of a secretaría
    pub async fn update(
        &self,
        id: i32,
        data: &SecretariaRequest,
    ) -> Result<secretaria::Model, InternalError> {
        let mut model = self.find_by_id(id).await?.into_active_model();
        model.nombre = Set(data.nombre.clone());
        model.descripcion = Set(data.descripcion.clone());
        model.ubicacion = Set(data.ubicacion.clone());
        model.secretario = Set(data.secretario.clone());
        model.telefono = Set(data.telefono.clone());
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_secretaria", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = Secretaria::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_secretaria", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Secretaria", id).into());
        }
        Ok(())
    }

    /// Number of dependencias that still belong to the secretaría
    pub async fn count_dependencias(&self, id: i32) -> Result<u64, InternalError> {
        dependencia::Entity::find()
            .filter(dependencia::Column::SecretariaId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_dependencias", e))
    }
}
