use chrono::{DateTime, Utc};
use poem_openapi::Object;

use crate::types::catalog::{AreaFuncionario, ClaseMantenimiento, TipoFuncionario};
use crate::types::db::{funcionario, reporte_servicio, repuesto, tipo_mantenimiento};
use crate::types::dto::common::format_timestamp;

#[derive(Object, Debug, Clone)]
pub struct FuncionarioRequest {
    pub nombre: String,
    pub cargo: String,
    /// Unique across staff
    pub cedula: String,
    pub tipo: TipoFuncionario,
    pub area: AreaFuncionario,
}

#[derive(Object, Debug, Clone)]
pub struct FuncionarioResponse {
    pub id: i32,
    pub nombre: String,
    pub cargo: String,
    pub cedula: String,
    pub tipo: TipoFuncionario,
    pub area: AreaFuncionario,
    pub created_at: String,
    pub updated_at: String,
}

impl From<funcionario::Model> for FuncionarioResponse {
    fn from(model: funcionario::Model) -> Self {
        Self {
            id: model.id,
            nombre: model.nombre,
            cargo: model.cargo,
            cedula: model.cedula,
            tipo: model.tipo,
            area: model.area,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

/// Request body for creating or replacing a service report header
#[derive(Object, Debug, Clone)]
pub struct ReporteServicioRequest {
    /// Serviced equipment, must exist when given
    pub equipo_id: Option<i32>,
    pub fecha_inicio: DateTime<Utc>,
    /// Not before fecha_inicio
    pub fecha_finalizacion: Option<DateTime<Utc>>,
    pub dependencia: String,
    pub ubicacion: String,
    pub diagnostico_falla: Option<String>,
    pub actividad_realizada: String,
    pub observaciones: Option<String>,
}

#[derive(Object, Debug, Clone)]
pub struct ReporteServicioResponse {
    pub id: i32,
    pub equipo_id: Option<i32>,
    pub creado_por_id: Option<i32>,
    pub fecha_inicio: DateTime<Utc>,
    pub fecha_finalizacion: Option<DateTime<Utc>>,
    pub dependencia: String,
    pub ubicacion: String,
    pub diagnostico_falla: Option<String>,
    pub actividad_realizada: String,
    pub observaciones: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<reporte_servicio::Model> for ReporteServicioResponse {
    fn from(model: reporte_servicio::Model) -> Self {
        Self {
            id: model.id,
            equipo_id: model.equipo_id,
            creado_por_id: model.creado_por_id,
            fecha_inicio: model.fecha_inicio,
            fecha_finalizacion: model.fecha_finalizacion,
            dependencia: model.dependencia,
            ubicacion: model.ubicacion,
            diagnostico_falla: model.diagnostico_falla,
            actividad_realizada: model.actividad_realizada,
            observaciones: model.observaciones,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

/// Maintenance classification and work flags of a report
#[derive(Object, Debug, Clone)]
pub struct TipoMantenimientoRequest {
    pub reporte_id: i32,
    #[oai(flatten)]
    pub detalle: TipoMantenimientoDetalle,
}

/// Fields shared by the standalone and the composite maintenance payloads
#[derive(Object, Debug, Clone)]
pub struct TipoMantenimientoDetalle {
    pub tipo: ClaseMantenimiento,
    #[oai(default)]
    pub revision: bool,
    #[oai(default)]
    pub instalacion: bool,
    #[oai(default)]
    pub configuracion: bool,
    #[oai(default)]
    pub ingreso: bool,
    #[oai(default)]
    pub salida: bool,
    #[oai(default)]
    pub concepto_baja: bool,
    #[oai(default)]
    pub otro: bool,
    /// Required when `otro` is set
    pub descripcion_otro: Option<String>,
}

#[derive(Object, Debug, Clone)]
pub struct TipoMantenimientoResponse {
    pub id: i32,
    pub reporte_id: i32,
    pub tipo: ClaseMantenimiento,
    pub revision: bool,
    pub instalacion: bool,
    pub configuracion: bool,
    pub ingreso: bool,
    pub salida: bool,
    pub concepto_baja: bool,
    pub otro: bool,
    pub descripcion_otro: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<tipo_mantenimiento::Model> for TipoMantenimientoResponse {
    fn from(model: tipo_mantenimiento::Model) -> Self {
        Self {
            id: model.id,
            reporte_id: model.reporte_id,
            tipo: model.tipo,
            revision: model.revision,
            instalacion: model.instalacion,
            configuracion: model.configuracion,
            ingreso: model.ingreso,
            salida: model.salida,
            concepto_baja: model.concepto_baja,
            otro: model.otro,
            descripcion_otro: model.descripcion_otro,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

/// Spare part used or replaced during a service
#[derive(Object, Debug, Clone)]
pub struct RepuestoRequest {
    /// Owning report, must exist when given
    pub reporte_id: Option<i32>,
    #[oai(flatten)]
    pub detalle: RepuestoDetalle,
}

#[derive(Object, Debug, Clone)]
pub struct RepuestoDetalle {
    /// Must be greater than zero
    pub cantidad: i32,
    pub serial_numero_parte: String,
    pub marca: Option<String>,
    pub tecnologia: Option<String>,
    pub capacidad: Option<String>,
    pub descripcion: String,
    /// Defaults to now
    pub fecha_utilizacion: Option<DateTime<Utc>>,
}

#[derive(Object, Debug, Clone)]
pub struct RepuestoResponse {
    pub id: i32,
    pub reporte_id: Option<i32>,
    pub cantidad: i32,
    pub serial_numero_parte: String,
    pub marca: Option<String>,
    pub tecnologia: Option<String>,
    pub capacidad: Option<String>,
    pub descripcion: String,
    pub fecha_utilizacion: DateTime<Utc>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<repuesto::Model> for RepuestoResponse {
    fn from(model: repuesto::Model) -> Self {
        Self {
            id: model.id,
            reporte_id: model.reporte_id,
            cantidad: model.cantidad,
            serial_numero_parte: model.serial_numero_parte,
            marca: model.marca,
            tecnologia: model.tecnologia,
            capacidad: model.capacidad,
            descripcion: model.descripcion,
            fecha_utilizacion: model.fecha_utilizacion,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

/// Body of `POST /reportes-servicio/completo`
#[derive(Object, Debug, Clone)]
pub struct ReporteCompletoRequest {
    #[oai(flatten)]
    pub reporte: ReporteServicioRequest,
    pub tipo_mantenimiento: TipoMantenimientoDetalle,
    #[oai(default)]
    pub repuestos: Vec<RepuestoDetalle>,
    #[oai(default)]
    pub funcionario_ids: Vec<i32>,
}

/// Report with maintenance type, spare parts, staff and creator
#[derive(Object, Debug, Clone)]
pub struct ReporteCompletoResponse {
    #[oai(flatten)]
    pub reporte: ReporteServicioResponse,
    pub creado_por_nombre: Option<String>,
    pub tipos_mantenimiento: Vec<TipoMantenimientoResponse>,
    pub repuestos: Vec<RepuestoResponse>,
    pub funcionarios: Vec<FuncionarioResponse>,
}

/// Created response of the composite workflow
#[derive(Object, Debug)]
pub struct ReporteCreadoResponse {
    pub message: String,
    pub reporte: ReporteCompletoResponse,
}

/// One row of the report summary listing
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ReporteResumenResponse {
    pub id: i32,
    pub creado_por_id: Option<i32>,
    /// "nombre apellido" of the creator
    pub creado_por_nombre: Option<String>,
    pub diagnostico_falla: Option<String>,
    pub actividad_realizada: String,
    /// PREVENTIVO or CORRECTIVO, absent when the report has none
    pub tipo_mantenimiento: Option<String>,
    /// "No" or "Sí (n)"
    pub repuestos: String,
    /// YYYY-MM-DD HH:MM
    pub fecha_inicio: String,
    pub fecha_finalizacion: Option<String>,
}
