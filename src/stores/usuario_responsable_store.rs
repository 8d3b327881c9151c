use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::usuario_responsable::{self, Entity as UsuarioResponsable};
use crate::types::dto::organizacion::UsuarioResponsableRequest;

/// Data access for the people equipment is assigned to
pub struct UsuarioResponsableStore {
    db: DatabaseConnection,
}

impl UsuarioResponsableStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        data: &UsuarioResponsableRequest,
    ) -> Result<usuario_responsable::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = usuario_responsable::ActiveModel {
            dependencia_id: Set(data.dependencia_id),
            nombres_apellidos: Set(data.nombres_apellidos.clone()),
            cedula: Set(data.cedula.clone()),
            correo_personal: Set(data.correo_personal.clone()),
            tipo_vinculacion: Set(data.tipo_vinculacion),
            celular: Set(data.celular.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::from_write("create_usuario_responsable", e))
    }

    pub async fn find_all(&self) -> Result<Vec<usuario_responsable::Model>, InternalError> {
        UsuarioResponsable::find()
            .order_by_asc(usuario_responsable::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_usuarios_responsables", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<usuario_responsable::Model, InternalError> {
        UsuarioResponsable::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_usuario_responsable", e))?
            .ok_or_else(|| InventoryError::not_found("Usuario responsable", id).into())
    }

    pub async fn find_by_cedula(
        &self,
        cedula: &str,
    ) -> Result<Option<usuario_responsable::Model>, InternalError> {
        UsuarioResponsable::find()
            .filter(usuario_responsable::Column::Cedula.eq(cedula))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_usuario_responsable_by_cedula", e))
    }

    pub async fn find_by_dependencia(
        &self,
        dependencia_id: i32,
    ) -> Result<Vec<usuario_responsable::Model>, InternalError> {
        UsuarioResponsable::find()
            .filter(usuario_responsable::Column::DependenciaId.eq(dependencia_id))
            .order_by_asc(usuario_responsable::Column::NombresApellidos)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_usuarios_by_dependencia", e))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, InternalError> {
        let count = UsuarioResponsable::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("usuario_responsable_exists", e))?;
        Ok(count > 0)
    }

    pub async fn update(
        &self,
        id: i32,
        data: &UsuarioResponsableRequest,
    ) -> Result<usuario_responsable::Model, InternalError> {
        let mut model = self.find_by_id(id).await?.into_active_model();
        model.dependencia_id = Set(data.dependencia_id);
        model.nombres_apellidos = Set(data.nombres_apellidos.clone());
        model.cedula = Set(data.cedula.clone());
        model.correo_personal = Set(data.correo_personal.clone());
        model.tipo_vinculacion = Set(data.tipo_vinculacion);
        model.celular = Set(data.celular.clone());
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_usuario_responsable", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = UsuarioResponsable::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_usuario_responsable", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Usuario responsable", id).into());
        }
        Ok(())
    }
}
