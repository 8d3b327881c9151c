use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::usuario_sistema::{self, Entity as UsuarioSistema};
use crate::types::dto::componentes::UsuarioSistemaRequest;

pub struct UsuarioSistemaStore {
    db: DatabaseConnection,
}

impl UsuarioSistemaStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        data: &UsuarioSistemaRequest,
    ) -> Result<usuario_sistema::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = usuario_sistema::ActiveModel {
            equipo_id: Set(data.equipo_id),
            nombre_usuario: Set(data.nombre_usuario.clone()),
            contrasena: Set(data.contrasena.clone()),
            es_administrador: Set(data.es_administrador.unwrap_or(false)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::from_write("create_usuario_sistema", e))
    }

    pub async fn find_all(&self) -> Result<Vec<usuario_sistema::Model>, InternalError> {
        UsuarioSistema::find()
            .order_by_asc(usuario_sistema::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_usuarios_sistema", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<usuario_sistema::Model, InternalError> {
        UsuarioSistema::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_usuario_sistema", e))?
            .ok_or_else(|| InventoryError::not_found("Usuario de sistema", id).into())
    }

    pub async fn find_by_equipo(&self, equipo_id: i32) -> Result<Vec<usuario_sistema::Model>, InternalError> {
        UsuarioSistema::find()
            .filter(usuario_sistema::Column::EquipoId.eq(equipo_id))
            .order_by_asc(usuario_sistema::Column::NombreUsuario)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_usuarios_sistema_by_equipo", e))
    }

    /// Search by partial account name and/or exact equipment
    pub async fn search(
        &self,
        nombre_usuario: Option<&str>,
        equipo_id: Option<i32>,
    ) -> Result<Vec<usuario_sistema::Model>, InternalError> {
        let mut condition = Condition::all();
        if let Some(nombre) = nombre_usuario {
            condition = condition.add(usuario_sistema::Column::NombreUsuario.contains(nombre));
        }
        if let Some(equipo_id) = equipo_id {
            condition = condition.add(usuario_sistema::Column::EquipoId.eq(equipo_id));
        }

        UsuarioSistema::find()
            .filter(condition)
            .order_by_asc(usuario_sistema::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("search_usuarios_sistema", e))
    }

    /// Account with this exact name on the equipment
    pub async fn find_in_equipo(
        &self,
        equipo_id: i32,
        nombre_usuario: &str,
    ) -> Result<Option<usuario_sistema::Model>, InternalError> {
        UsuarioSistema::find()
            .filter(usuario_sistema::Column::EquipoId.eq(equipo_id))
            .filter(usuario_sistema::Column::NombreUsuario.eq(nombre_usuario))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_usuario_sistema_in_equipo", e))
    }

    pub async fn update(
        &self,
        id: i32,
        data: &UsuarioSistemaRequest,
    ) -> Result<usuario_sistema::Model, InternalError> {
        let existing = self.find_by_id(id).await?;
        let es_administrador = data.es_administrador.unwrap_or(existing.es_administrador);

        let mut model = existing.into_active_model();
        model.equipo_id = Set(data.equipo_id);
        model.nombre_usuario = Set(data.nombre_usuario.clone());
        model.contrasena = Set(data.contrasena.clone());
        model.es_administrador = Set(es_administrador);
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_usuario_sistema", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = UsuarioSistema::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_usuario_sistema", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Usuario de sistema", id).into());
        }
        Ok(())
    }
}
