use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::db::repuesto::{self, Entity as Repuesto};
use crate::types::dto::reporte::RepuestoDetalle;

pub struct RepuestoStore {
    db: DatabaseConnection,
}

impl RepuestoStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert on any connection; `fecha_utilizacion` falls back to now
    pub async fn insert_with<C: ConnectionTrait>(
        conn: &C,
        reporte_id: Option<i32>,
        detalle: &RepuestoDetalle,
    ) -> Result<repuesto::Model, InternalError> {
        let now = Utc::now();
        let model = repuesto::ActiveModel {
            reporte_id: Set(reporte_id),
            cantidad: Set(detalle.cantidad),
            serial_numero_parte: Set(detalle.serial_numero_parte.clone()),
            marca: Set(detalle.marca.clone()),
            tecnologia: Set(detalle.tecnologia.clone()),
            capacidad: Set(detalle.capacidad.clone()),
            descripcion: Set(detalle.descripcion.clone()),
            fecha_utilizacion: Set(detalle.fecha_utilizacion.unwrap_or(now)),
            created_at: Set(now.timestamp()),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::from_write("create_repuesto", e))
    }

    pub async fn create(
        &self,
        reporte_id: Option<i32>,
        detalle: &RepuestoDetalle,
    ) -> Result<repuesto::Model, InternalError> {
        Self::insert_with(&self.db, reporte_id, detalle).await
    }

    pub async fn find_all(&self) -> Result<Vec<repuesto::Model>, InternalError> {
        Repuesto::find()
            .order_by_asc(repuesto::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_repuestos", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<repuesto::Model, InternalError> {
        Repuesto::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_repuesto", e))?
            .ok_or_else(|| InventoryError::not_found("Repuesto", id).into())
    }

    pub async fn find_by_reporte(&self, reporte_id: i32) -> Result<Vec<repuesto::Model>, InternalError> {
        Repuesto::find()
            .filter(repuesto::Column::ReporteId.eq(reporte_id))
            .order_by_asc(repuesto::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_repuestos_by_reporte", e))
    }

    pub async fn update(
        &self,
        id: i32,
        reporte_id: Option<i32>,
        detalle: &RepuestoDetalle,
    ) -> Result<repuesto::Model, InternalError> {
        let existing = self.find_by_id(id).await?;
        let fecha = detalle.fecha_utilizacion.unwrap_or(existing.fecha_utilizacion);

        let mut model = existing.into_active_model();
        model.reporte_id = Set(reporte_id);
        model.cantidad = Set(detalle.cantidad);
        model.serial_numero_parte = Set(detalle.serial_numero_parte.clone());
        model.marca = Set(detalle.marca.clone());
        model.tecnologia = Set(detalle.tecnologia.clone());
        model.capacidad = Set(detalle.capacidad.clone());
        model.descripcion = Set(detalle.descripcion.clone());
        model.fecha_utilizacion = Set(fecha);
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_repuesto", e))
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = Repuesto::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_repuesto", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Repuesto", id).into());
        }
        Ok(())
    }
}
