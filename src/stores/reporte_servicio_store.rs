use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, IntoActiveModel, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait, sea_query::Expr,
};

use crate::errors::{InternalError, InventoryError};
use crate::stores::repuesto_store::RepuestoStore;
use crate::stores::tipo_mantenimiento_store::TipoMantenimientoStore;
use crate::types::catalog::{self, ClaseMantenimiento};
use crate::types::db::reporte_servicio::{self, Entity as ReporteServicio};
use crate::types::db::{funcionario, reporte_funcionario, repuesto, tipo_mantenimiento, usuario};
use crate::types::dto::reporte::{
    ReporteCompletoRequest, ReporteCompletoResponse, ReporteResumenResponse, ReporteServicioRequest,
};

/// A report with everything that hangs off it
#[derive(Debug)]
pub struct ReporteCompleto {
    pub reporte: reporte_servicio::Model,
    pub creado_por: Option<usuario::Model>,
    pub tipos_mantenimiento: Vec<tipo_mantenimiento::Model>,
    pub repuestos: Vec<repuesto::Model>,
    pub funcionarios: Vec<funcionario::Model>,
}

impl From<ReporteCompleto> for ReporteCompletoResponse {
    fn from(completo: ReporteCompleto) -> Self {
        Self {
            creado_por_nombre: completo.creado_por.as_ref().map(usuario::Model::nombre_completo),
            reporte: completo.reporte.into(),
            tipos_mantenimiento: completo.tipos_mantenimiento.into_iter().map(Into::into).collect(),
            repuestos: completo.repuestos.into_iter().map(Into::into).collect(),
            funcionarios: completo.funcionarios.into_iter().map(Into::into).collect(),
        }
    }
}

/// Raw material of one summary row
#[derive(Debug)]
pub struct ReporteResumenFila {
    pub reporte: reporte_servicio::Model,
    pub creado_por: Option<usuario::Model>,
    pub tipo: Option<ClaseMantenimiento>,
    pub total_repuestos: i64,
}

impl From<ReporteResumenFila> for ReporteResumenResponse {
    fn from(fila: ReporteResumenFila) -> Self {
        let formato = "%Y-%m-%d %H:%M";
        Self {
            id: fila.reporte.id,
            creado_por_id: fila.reporte.creado_por_id,
            creado_por_nombre: fila.creado_por.as_ref().map(usuario::Model::nombre_completo),
            diagnostico_falla: fila.reporte.diagnostico_falla,
            actividad_realizada: fila.reporte.actividad_realizada,
            tipo_mantenimiento: fila.tipo.as_ref().map(catalog::label),
            repuestos: if fila.total_repuestos > 0 {
                format!("Sí ({})", fila.total_repuestos)
            } else {
                "No".to_string()
            },
            fecha_inicio: fila.reporte.fecha_inicio.format(formato).to_string(),
            fecha_finalizacion: fila
                .reporte
                .fecha_finalizacion
                .map(|fecha| fecha.format(formato).to_string()),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct RepuestosPorReporte {
    reporte_id: Option<i32>,
    total: i64,
}

/// Data access for service reports
pub struct ReporteServicioStore {
    db: DatabaseConnection,
}

impl ReporteServicioStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert_with<C: ConnectionTrait>(
        conn: &C,
        data: &ReporteServicioRequest,
        creado_por_id: Option<i32>,
    ) -> Result<reporte_servicio::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = reporte_servicio::ActiveModel {
            equipo_id: Set(data.equipo_id),
            creado_por_id: Set(creado_por_id),
            fecha_inicio: Set(data.fecha_inicio),
            fecha_finalizacion: Set(data.fecha_finalizacion),
            dependencia: Set(data.dependencia.clone()),
            ubicacion: Set(data.ubicacion.clone()),
            diagnostico_falla: Set(data.diagnostico_falla.clone()),
            actividad_realizada: Set(data.actividad_realizada.clone()),
            observaciones: Set(data.observaciones.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::from_write("create_reporte_servicio", e))
    }

    pub async fn create(
        &self,
        data: &ReporteServicioRequest,
        creado_por_id: Option<i32>,
    ) -> Result<reporte_servicio::Model, InternalError> {
        Self::insert_with(&self.db, data, creado_por_id).await
    }

    /// Insert the report, its maintenance type, spare parts and staff links atomically
    ///
    /// Any failing insert returns early and drops the transaction, which rolls
    /// back everything written so far.
    pub async fn create_full(
        &self,
        data: &ReporteCompletoRequest,
        creado_por_id: Option<i32>,
    ) -> Result<reporte_servicio::Model, InternalError> {
        let txn = self.db.begin().await.map_err(InternalError::transaction_begin)?;

        let reporte = Self::insert_with(&txn, &data.reporte, creado_por_id).await?;
        TipoMantenimientoStore::insert_with(&txn, reporte.id, &data.tipo_mantenimiento).await?;

        for detalle in &data.repuestos {
            RepuestoStore::insert_with(&txn, Some(reporte.id), detalle).await?;
        }

        if !data.funcionario_ids.is_empty() {
            let links = data.funcionario_ids.iter().map(|funcionario_id| {
                reporte_funcionario::ActiveModel {
                    reporte_id: Set(reporte.id),
                    funcionario_id: Set(*funcionario_id),
                }
            });
            reporte_funcionario::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await
                .map_err(|e| InternalError::from_write("link_funcionarios", e))?;
        }

        txn.commit().await.map_err(InternalError::transaction_commit)?;
        Ok(reporte)
    }

    pub async fn find_all(&self) -> Result<Vec<reporte_servicio::Model>, InternalError> {
        ReporteServicio::find()
            .order_by_desc(reporte_servicio::Column::FechaInicio)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_reportes", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<reporte_servicio::Model, InternalError> {
        ReporteServicio::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_reporte", e))?
            .ok_or_else(|| InventoryError::not_found("Reporte de servicio", id).into())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, InternalError> {
        let count = ReporteServicio::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("reporte_exists", e))?;
        Ok(count > 0)
    }

    pub async fn find_by_equipo(&self, equipo_id: i32) -> Result<Vec<reporte_servicio::Model>, InternalError> {
        ReporteServicio::find()
            .filter(reporte_servicio::Column::EquipoId.eq(equipo_id))
            .order_by_desc(reporte_servicio::Column::FechaInicio)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_reportes_by_equipo", e))
    }

    /// Load a report together with its creator and child records
    pub async fn find_completo(&self, id: i32) -> Result<ReporteCompleto, InternalError> {
        let map = |e| InternalError::database("load_reporte_completo", e);

        let (reporte, creado_por) = ReporteServicio::find_by_id(id)
            .find_also_related(usuario::Entity)
            .one(&self.db)
            .await
            .map_err(map)?
            .ok_or_else(|| InternalError::from(InventoryError::not_found("Reporte de servicio", id)))?;

        let tipos_mantenimiento = reporte
            .find_related(tipo_mantenimiento::Entity)
            .order_by_asc(tipo_mantenimiento::Column::Id)
            .all(&self.db)
            .await
            .map_err(map)?;
        let repuestos = reporte
            .find_related(repuesto::Entity)
            .order_by_asc(repuesto::Column::Id)
            .all(&self.db)
            .await
            .map_err(map)?;
        let funcionarios = reporte
            .find_related(funcionario::Entity)
            .order_by_asc(funcionario::Column::Nombre)
            .all(&self.db)
            .await
            .map_err(map)?;

        Ok(ReporteCompleto {
            reporte,
            creado_por,
            tipos_mantenimiento,
            repuestos,
            funcionarios,
        })
    }

    /// Every report with its creator, first maintenance type and spare part count
    pub async fn resumen(&self) -> Result<Vec<ReporteResumenFila>, InternalError> {
        let map = |e| InternalError::database("load_resumen_reportes", e);

        let reportes = ReporteServicio::find()
            .find_also_related(usuario::Entity)
            .order_by_desc(reporte_servicio::Column::FechaInicio)
            .all(&self.db)
            .await
            .map_err(map)?;

        let mut tipos: HashMap<i32, ClaseMantenimiento> = HashMap::new();
        for tipo in tipo_mantenimiento::Entity::find()
            .order_by_asc(tipo_mantenimiento::Column::Id)
            .all(&self.db)
            .await
            .map_err(map)?
        {
            tipos.entry(tipo.reporte_id).or_insert(tipo.tipo);
        }

        let conteos: HashMap<i32, i64> = repuesto::Entity::find()
            .select_only()
            .column(repuesto::Column::ReporteId)
            .column_as(Expr::col(repuesto::Column::Id).count(), "total")
            .filter(repuesto::Column::ReporteId.is_not_null())
            .group_by(repuesto::Column::ReporteId)
            .into_model::<RepuestosPorReporte>()
            .all(&self.db)
            .await
            .map_err(map)?
            .into_iter()
            .filter_map(|fila| fila.reporte_id.map(|id| (id, fila.total)))
            .collect();

        Ok(reportes
            .into_iter()
            .map(|(reporte, creado_por)| ReporteResumenFila {
                tipo: tipos.get(&reporte.id).copied(),
                total_repuestos: conteos.get(&reporte.id).copied().unwrap_or(0),
                reporte,
                creado_por,
            })
            .collect())
    }

    /// Replace the editable fields; the creator is kept
    pub async fn update(
        &self,
        id: i32,
        data: &ReporteServicioRequest,
    ) -> Result<reporte_servicio::Model, InternalError> {
        let mut model = self.find_by_id(id).await?.into_active_model();
        model.equipo_id = Set(data.equipo_id);
        model.fecha_inicio = Set(data.fecha_inicio);
        model.fecha_finalizacion = Set(data.fecha_finalizacion);
        model.dependencia = Set(data.dependencia.clone());
        model.ubicacion = Set(data.ubicacion.clone());
        model.diagnostico_falla = Set(data.diagnostico_falla.clone());
        model.actividad_realizada = Set(data.actividad_realizada.clone());
        model.observaciones = Set(data.observaciones.clone());
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_reporte_servicio", e))
    }

    /// Delete a report; maintenance types, spare parts and staff links cascade
    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = ReporteServicio::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::from_write("delete_reporte_servicio", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Reporte de servicio", id).into());
        }
        Ok(())
    }
}
