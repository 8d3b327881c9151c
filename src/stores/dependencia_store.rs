use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::dependencia::{self, Entity as Dependencia};
use crate::types::db::usuario_responsable;
use crate::types::dto::organizacion::DependenciaRequest;

/// Data access for dependencias
pub struct DependenciaStore {
    db: DatabaseConnection,
}

impl DependenciaStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, data: &DependenciaRequest) -> Result<dependencia::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = dependencia::ActiveModel {
            secretaria_id: Set(data.secretaria_id),
            nombre: Set(data.nombre.clone()),
            descripcion: Set(data.descripcion.clone()),
            ubicacion_oficina: Set(data.ubicacion_oficina.clone()),
            jefe_oficina: Set(data.jefe_oficina.clone()),
            correo_institucional: Set(data.correo_institucional.clone()),
            telefono: Set(data.telefono.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::from_write("create_dependencia", e))
    }

    pub async fn find_all(&self) -> Result<Vec<dependencia::Model>, InternalError> {
        Dependencia::find()
            .order_by_asc(dependencia::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_dependencias", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<dependencia::Model, InternalError> {
        Dependencia::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_dependencia", e))?
            .ok_or_else(|| InventoryError::not_found("Dependencia", id).into())
    }

    pub async fn find_by_secretaria(&self, secretaria_id: i32) -> Result<Vec<dependencia::Model>, InternalError> {
        Dependencia::find()
            .filter(dependencia::Column::SecretariaId.eq(secretaria_id))
            .order_by_asc(dependencia::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_dependencias_by_secretaria", e))
    }

    /// Seed lookup: a dependencia name is only unique inside its secretaría
    pub async fn find_by_nombre_in_secretaria(
        &self,
        nombre: &str,
        secretaria_id: i32,
    ) -> Result<Option<dependencia::Model>, InternalError> {
        Dependencia::find()
            .filter(dependencia::Column::Nombre.eq(nombre))
            .filter(dependencia::Column::SecretariaId.eq(secretaria_id))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_dependencia_by_nombre", e))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, InternalError> {
        let count = Dependencia::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("dependencia_exists", e))?;
        Ok(count > 0)
    }

    pub async fn update(
        &self,
        id: i32,
        data: &DependenciaRequest,
    ) -> Result<dependencia::Model, InternalError> {
        let mut model = self.find_by_id(id).await?.into_active_model();
        model.secretaria_id = Set(data.secretaria_id);
        model.nombre = Set(data.nombre.clone());
        model.descripcion = Set(data.descripcion.clone());
        model.ubicacion_oficina = Set(data.ubicacion_oficina.clone());
        model.jefe_oficina = Set(data.jefe_oficina.clone());
        model.correo_institucional = Set(data.correo_institucional.clone());
        model.telefono = Set(data.telefono.clone());
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_dependencia", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = Dependencia::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_dependencia", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Dependencia", id).into());
        }
        Ok(())
    }

    pub async fn count_usuarios(&self, id: i32) -> Result<u64, InternalError> {
        usuario_responsable::Entity::find()
            .filter(usuario_responsable::Column::DependenciaId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_usuarios_responsables", e))
    }
}
