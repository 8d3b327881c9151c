use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::tipo_mantenimiento::{self, Entity as TipoMantenimiento};
use crate::types::dto::reporte::TipoMantenimientoDetalle;

pub struct TipoMantenimientoStore {
    db: DatabaseConnection,
}

impl TipoMantenimientoStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert on any connection, so the composite report can share its transaction
    pub async fn insert_with<C: ConnectionTrait>(
        conn: &C,
        reporte_id: i32,
        detalle: &TipoMantenimientoDetalle,
    ) -> Result<tipo_mantenimiento::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = tipo_mantenimiento::ActiveModel {
            reporte_id: Set(reporte_id),
            tipo: Set(detalle.tipo),
            revision: Set(detalle.revision),
            instalacion: Set(detalle.instalacion),
            configuracion: Set(detalle.configuracion),
            ingreso: Set(detalle.ingreso),
            salida: Set(detalle.salida),
            concepto_baja: Set(detalle.concepto_baja),
            otro: Set(detalle.otro),
            descripcion_otro: Set(detalle.descripcion_otro.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::from_write("create_tipo_mantenimiento", e))
    }

    pub async fn create(
        &self,
        reporte_id: i32,
        detalle: &TipoMantenimientoDetalle,
    ) -> Result<tipo_mantenimiento::Model, InternalError> {
        Self::insert_with(&self.db, reporte_id, detalle).await
    }

    pub async fn find_all(&self) -> Result<Vec<tipo_mantenimiento::Model>, InternalError> {
        TipoMantenimiento::find()
            .order_by_asc(tipo_mantenimiento::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_tipos_mantenimiento", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<tipo_mantenimiento::Model, InternalError> {
        TipoMantenimiento::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_tipo_mantenimiento", e))?
            .ok_or_else(|| InventoryError::not_found("Tipo de mantenimiento", id).into())
    }

    pub async fn find_by_reporte(&self, reporte_id: i32) -> Result<Vec<tipo_mantenimiento::Model>, InternalError> {
        TipoMantenimiento::find()
            .filter(tipo_mantenimiento::Column::ReporteId.eq(reporte_id))
            .order_by_asc(tipo_mantenimiento::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_tipos_by_reporte", e))
    }

    pub async fn update(
        &self,
        id: i32,
        reporte_id: i32,
        detalle: &TipoMantenimientoDetalle,
    ) -> Result<tipo_mantenimiento::Model, InternalError> {
        let mut model = self.find_by_id(id).await?.into_active_model();
        model.reporte_id = Set(reporte_id);
        model.tipo = Set(detalle.tipo);
        model.revision = Set(detalle.revision);
        model.instalacion = Set(detalle.instalacion);
        model.configuracion = Set(detalle.configuracion);
        model.ingreso = Set(detalle.ingreso);
        model.salida = Set(detalle.salida);
        model.concepto_baja = Set(detalle.concepto_baja);
        model.otro = Set(detalle.otro);
        model.descripcion_otro = Set(detalle.descripcion_otro.clone());
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_tipo_mantenimiento", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = TipoMantenimiento::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_tipo_mantenimiento", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Tipo de mantenimiento", id).into());
        }
        Ok(())
    }
}
