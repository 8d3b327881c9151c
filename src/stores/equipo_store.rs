use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, JoinType, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set, TransactionTrait, sea_query::Expr,
};

use crate::errors::{InternalError, InventoryError};
use crate::types::catalog::TipoDispositivo;
use crate::types::db::equipo::{self, Entity as Equipo};
use crate::types::db::{
    acceso_remoto, backup, configuracion_red, dependencia, estado_equipo, hardware_interno,
    periferico, reporte_servicio, software, usuario_responsable, usuario_sistema,
};
use crate::types::dto::equipo::{EquipoCompletoResponse, EquipoRequest, HojaVidaResponse};

/// An equipment together with every record that hangs off it
#[derive(Debug)]
pub struct EquipoConHijos {
    pub equipo: equipo::Model,
    pub perifericos: Vec<periferico::Model>,
    pub hardware_interno: Vec<hardware_interno::Model>,
    pub software: Vec<software::Model>,
    pub configuracion_red: Option<configuracion_red::Model>,
    pub usuarios_sistema: Vec<usuario_sistema::Model>,
    pub accesos_remotos: Vec<acceso_remoto::Model>,
    pub backups: Vec<backup::Model>,
    pub reportes_servicio: Vec<reporte_servicio::Model>,
}

impl From<EquipoConHijos> for EquipoCompletoResponse {
    fn from(hijos: EquipoConHijos) -> Self {
        Self {
            equipo: hijos.equipo.into(),
            perifericos: hijos.perifericos.into_iter().map(Into::into).collect(),
            hardware_interno: hijos.hardware_interno.into_iter().map(Into::into).collect(),
            software: hijos.software.into_iter().map(Into::into).collect(),
            configuracion_red: hijos.configuracion_red.map(Into::into),
            usuarios_sistema: hijos.usuarios_sistema.into_iter().map(Into::into).collect(),
            accesos_remotos: hijos.accesos_remotos.into_iter().map(Into::into).collect(),
            backups: hijos.backups.into_iter().map(Into::into).collect(),
            reportes_servicio: hijos.reportes_servicio.into_iter().map(Into::into).collect(),
        }
    }
}

/// Flat row of the hoja de vida join
#[derive(Debug, FromQueryResult)]
pub struct HojaVidaRow {
    pub id: i32,
    pub marca: String,
    pub modelo: Option<String>,
    pub observaciones_generales: Option<String>,
    pub placa_inventario: Option<String>,
    pub serial: String,
    pub tipo_dispositivo: Option<TipoDispositivo>,
    pub fecha_diligenciamiento: DateTime<Utc>,
    pub nombres_apellidos: Option<String>,
    pub cedula: Option<String>,
    pub ubicacion_oficina: Option<String>,
    pub estado: Option<String>,
}

impl From<HojaVidaRow> for HojaVidaResponse {
    fn from(row: HojaVidaRow) -> Self {
        Self {
            id: row.id,
            marca: row.marca,
            modelo: row.modelo,
            observaciones_generales: row.observaciones_generales,
            placa_inventario: row.placa_inventario,
            serial: row.serial,
            tipo_dispositivo: row.tipo_dispositivo,
            fecha_diligenciamiento: row.fecha_diligenciamiento,
            nombres_apellidos: row.nombres_apellidos,
            cedula: row.cedula,
            ubicacion_oficina: row.ubicacion_oficina,
            estado: row.estado,
        }
    }
}

/// Data access for equipment
pub struct EquipoStore {
    db: DatabaseConnection,
}

impl EquipoStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert an equipment
    ///
    /// `fecha_diligenciamiento` falls back to the current time.
    pub async fn create(&self, data: &EquipoRequest) -> Result<equipo::Model, InternalError> {
        let now = Utc::now();
        let model = equipo::ActiveModel {
            usuario_responsable_id: Set(data.usuario_responsable_id),
            estado_equipo_id: Set(data.estado_equipo_id),
            tipo_dispositivo: Set(data.tipo_dispositivo),
            placa_inventario: Set(data.placa_inventario.clone()),
            marca: Set(data.marca.clone()),
            serial: Set(data.serial.clone()),
            modelo: Set(data.modelo.clone()),
            fecha_diligenciamiento: Set(data.fecha_diligenciamiento.unwrap_or(now)),
            observaciones_generales: Set(data.observaciones_generales.clone()),
            created_at: Set(now.timestamp()),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::from_write("create_equipo", e))
    }

    pub async fn find_all(&self) -> Result<Vec<equipo::Model>, InternalError> {
        Equipo::find()
            .order_by_asc(equipo::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_equipos", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<equipo::Model, InternalError> {
        Equipo::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_equipo", e))?
            .ok_or_else(|| InventoryError::not_found("Equipo", id).into())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, InternalError> {
        let count = Equipo::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("equipo_exists", e))?;
        Ok(count > 0)
    }

    pub async fn find_by_serial(&self, serial: &str) -> Result<Option<equipo::Model>, InternalError> {
        Equipo::find()
            .filter(equipo::Column::Serial.eq(serial))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_equipo_by_serial", e))
    }

    pub async fn find_by_placa(&self, placa: &str) -> Result<Option<equipo::Model>, InternalError> {
        Equipo::find()
            .filter(equipo::Column::PlacaInventario.eq(placa))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_equipo_by_placa", e))
    }

    /// Equipment whose responsible user works in the given dependencia
    pub async fn find_by_dependencia(&self, dependencia_id: i32) -> Result<Vec<equipo::Model>, InternalError> {
        Equipo::find()
            .join(JoinType::InnerJoin, equipo::Relation::UsuarioResponsable.def())
            .filter(usuario_responsable::Column::DependenciaId.eq(dependencia_id))
            .order_by_asc(equipo::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_equipos_by_dependencia", e))
    }

    pub async fn find_by_estado(&self, estado_equipo_id: i32) -> Result<Vec<equipo::Model>, InternalError> {
        Equipo::find()
            .filter(equipo::Column::EstadoEquipoId.eq(estado_equipo_id))
            .order_by_asc(equipo::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_equipos_by_estado", e))
    }

    /// Load the equipment and all of its child collections
    pub async fn find_con_hijos(&self, id: i32) -> Result<EquipoConHijos, InternalError> {
        let equipo = self.find_by_id(id).await?;
        let map = |e| InternalError::database("load_equipo_children", e);

        let perifericos = equipo.find_related(periferico::Entity).all(&self.db).await.map_err(map)?;
        let hardware_interno = equipo
            .find_related(hardware_interno::Entity)
            .all(&self.db)
            .await
            .map_err(map)?;
        let software = equipo.find_related(software::Entity).all(&self.db).await.map_err(map)?;
        let configuracion_red = equipo
            .find_related(configuracion_red::Entity)
            .one(&self.db)
            .await
            .map_err(map)?;
        let usuarios_sistema = equipo
            .find_related(usuario_sistema::Entity)
            .all(&self.db)
            .await
            .map_err(map)?;
        let accesos_remotos = equipo
            .find_related(acceso_remoto::Entity)
            .all(&self.db)
            .await
            .map_err(map)?;
        let backups = equipo.find_related(backup::Entity).all(&self.db).await.map_err(map)?;
        let reportes_servicio = equipo
            .find_related(reporte_servicio::Entity)
            .order_by_desc(reporte_servicio::Column::FechaInicio)
            .all(&self.db)
            .await
            .map_err(map)?;

        Ok(EquipoConHijos {
            equipo,
            perifericos,
            hardware_interno,
            software,
            configuracion_red,
            usuarios_sistema,
            accesos_remotos,
            backups,
            reportes_servicio,
        })
    }

    /// Hoja de vida rows, optionally restricted to one equipment
    ///
    /// Left joins keep equipment without a responsible user or status.
    pub async fn hojas_de_vida(&self, id: Option<i32>) -> Result<Vec<HojaVidaRow>, InternalError> {
        let mut query = Equipo::find()
            .select_only()
            .column(equipo::Column::Id)
            .column(equipo::Column::Marca)
            .column(equipo::Column::Modelo)
            .column(equipo::Column::ObservacionesGenerales)
            .column(equipo::Column::PlacaInventario)
            .column(equipo::Column::Serial)
            .column(equipo::Column::TipoDispositivo)
            .column(equipo::Column::FechaDiligenciamiento)
            .column_as(usuario_responsable::Column::NombresApellidos, "nombres_apellidos")
            .column_as(usuario_responsable::Column::Cedula, "cedula")
            .column_as(dependencia::Column::UbicacionOficina, "ubicacion_oficina")
            .column_as(estado_equipo::Column::Nombre, "estado")
            .join(JoinType::LeftJoin, equipo::Relation::UsuarioResponsable.def())
            .join(JoinType::LeftJoin, usuario_responsable::Relation::Dependencia.def())
            .join(JoinType::LeftJoin, equipo::Relation::EstadoEquipo.def());

        if let Some(id) = id {
            query = query.filter(equipo::Column::Id.eq(id));
        }

        query
            .order_by_asc(equipo::Column::Id)
            .into_model::<HojaVidaRow>()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_hojas_de_vida", e))
    }

    pub async fn update(&self, id: i32, data: &EquipoRequest) -> Result<equipo::Model, InternalError> {
        let existing = self.find_by_id(id).await?;
        let fecha = data
            .fecha_diligenciamiento
            .unwrap_or(existing.fecha_diligenciamiento);

        let mut model = existing.into_active_model();
        model.usuario_responsable_id = Set(data.usuario_responsable_id);
        model.estado_equipo_id = Set(data.estado_equipo_id);
        model.tipo_dispositivo = Set(data.tipo_dispositivo);
        model.placa_inventario = Set(data.placa_inventario.clone());
        model.marca = Set(data.marca.clone());
        model.serial = Set(data.serial.clone());
        model.modelo = Set(data.modelo.clone());
        model.fecha_diligenciamiento = Set(fecha);
        model.observaciones_generales = Set(data.observaciones_generales.clone());
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::from_write("update_equipo", e))
    }

    /// Delete an equipment
    ///
    /// Child rows go with it through ON DELETE CASCADE. Service reports are kept
    /// and detached in the same transaction.
    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let txn = self.db.begin().await.map_err(InternalError::transaction_begin)?;

        reporte_servicio::Entity::update_many()
            .col_expr(reporte_servicio::Column::EquipoId, Expr::value(Option::<i32>::None))
            .filter(reporte_servicio::Column::EquipoId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| InternalError::database("detach_reportes", e))?;

        let result = Equipo::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| InternalError::from_write("delete_equipo", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Equipo", id).into());
        }

        txn.commit().await.map_err(InternalError::transaction_commit)?;
        Ok(())
    }
}
