use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::funcionario::{self, Entity as Funcionario};
use crate::types::db::reporte_servicio;
use crate::types::dto::reporte::FuncionarioRequest;

pub struct FuncionarioStore {
    db: DatabaseConnection,
}

impl FuncionarioStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, data: &FuncionarioRequest) -> Result<funcionario::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = funcionario::ActiveModel {
            nombre: Set(data.nombre.clone()),
            cargo: Set(data.cargo.clone()),
            cedula: Set(data.cedula.clone()),
            tipo: Set(data.tipo),
            area: Set(data.area),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::from_write("create_funcionario", e))
    }

    pub async fn find_all(&self) -> Result<Vec<funcionario::Model>, InternalError> {
        Funcionario::find()
            .order_by_asc(funcionario::Column::Nombre)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_funcionarios", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<funcionario::Model, InternalError> {
        Funcionario::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_funcionario", e))?
            .ok_or_else(|| InventoryError::not_found("Funcionario", id).into())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, InternalError> {
        let count = Funcionario::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("funcionario_exists", e))?;
        Ok(count > 0)
    }

    pub async fn find_by_cedula(&self, cedula: &str) -> Result<Option<funcionario::Model>, InternalError> {
        Funcionario::find()
            .filter(funcionario::Column::Cedula.eq(cedula))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_funcionario_by_cedula", e))
    }

    /// Staff linked to a report through the join table
    pub async fn find_by_reporte(&self, reporte_id: i32) -> Result<Vec<funcionario::Model>, InternalError> {
        let reporte = reporte_servicio::Entity::find_by_id(reporte_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_reporte", e))?
            .ok_or_else(|| InternalError::from(InventoryError::not_found("Reporte de servicio", reporte_id)))?;

        reporte
            .find_related(Funcionario)
            .order_by_asc(funcionario::Column::Nombre)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_funcionarios_by_reporte", e))
    }

    pub async fn update(&self, id: i32, data: &FuncionarioRequest) -> Result<funcionario::Model, InternalError> {
        let mut model = self.find_by_id(id).await?.into_active_model();
        model.nombre = Set(data.nombre.clone());
        model.cargo = Set(data.cargo.clone());
        model.cedula = Set(data.cedula.clone());
        model.tipo = Set(data.tipo);
        model.area = Set(data.area);
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_funcionario", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = Funcionario::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_funcionario", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Funcionario", id).into());
        }
        Ok(())
    }
}
