use chrono::{DateTime, Utc};
use poem_openapi::Object;

use crate::types::catalog::TipoDispositivo;
use crate::types::db::equipo;
use crate::types::dto::common::format_timestamp;
use crate::types::dto::componentes::{
    AccesoRemotoResponse, BackupResponse, ConfiguracionRedResponse, HardwareInternoResponse,
    PerifericoResponse, SoftwareResponse, UsuarioSistemaResponse,
};
use crate::types::dto::reporte::ReporteServicioResponse;

/// Request body for creating or replacing an equipment
#[derive(Object, Debug, Clone)]
pub struct EquipoRequest {
    /// Responsible person, must exist when given
    pub usuario_responsable_id: Option<i32>,

    /// Current status, must exist when given
    pub estado_equipo_id: Option<i32>,

    pub tipo_dispositivo: Option<TipoDispositivo>,

    /// Municipal inventory plate, unique when present
    pub placa_inventario: Option<String>,

    pub marca: String,

    /// Manufacturer serial, unique
    pub serial: String,

    pub modelo: Option<String>,

    /// Date the inventory sheet was filled in, defaults to now
    pub fecha_diligenciamiento: Option<DateTime<Utc>>,

    pub observaciones_generales: Option<String>,
}

#[derive(Object, Debug)]
pub struct EquipoResponse {
    pub id: i32,
    pub usuario_responsable_id: Option<i32>,
    pub estado_equipo_id: Option<i32>,
    pub tipo_dispositivo: Option<TipoDispositivo>,
    pub placa_inventario: Option<String>,
    pub marca: String,
    pub serial: String,
    pub modelo: Option<String>,
    pub fecha_diligenciamiento: DateTime<Utc>,
    pub observaciones_generales: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<equipo::Model> for EquipoResponse {
    fn from(model: equipo::Model) -> Self {
        Self {
            id: model.id,
            usuario_responsable_id: model.usuario_responsable_id,
            estado_equipo_id: model.estado_equipo_id,
            tipo_dispositivo: model.tipo_dispositivo,
            placa_inventario: model.placa_inventario,
            marca: model.marca,
            serial: model.serial,
            modelo: model.modelo,
            fecha_diligenciamiento: model.fecha_diligenciamiento,
            observaciones_generales: model.observaciones_generales,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

/// Equipment with every child collection loaded
#[derive(Object, Debug)]
pub struct EquipoCompletoResponse {
    #[oai(flatten)]
    pub equipo: EquipoResponse,
    pub perifericos: Vec<PerifericoResponse>,
    pub hardware_interno: Vec<HardwareInternoResponse>,
    pub software: Vec<SoftwareResponse>,
    pub configuracion_red: Option<ConfiguracionRedResponse>,
    pub usuarios_sistema: Vec<UsuarioSistemaResponse>,
    pub accesos_remotos: Vec<AccesoRemotoResponse>,
    pub backups: Vec<BackupResponse>,
    pub reportes_servicio: Vec<ReporteServicioResponse>,
}

/// Hoja de vida: flat equipment sheet joined with its owner and status
#[derive(Object, Debug, Clone, PartialEq)]
pub struct HojaVidaResponse {
    pub id: i32,
    pub marca: String,
    pub modelo: Option<String>,
    pub observaciones_generales: Option<String>,
    pub placa_inventario: Option<String>,
    pub serial: String,
    pub tipo_dispositivo: Option<TipoDispositivo>,
    pub fecha_diligenciamiento: DateTime<Utc>,
    /// Responsible user's full name
    pub nombres_apellidos: Option<String>,
    pub cedula: Option<String>,
    /// Office of the responsible user's dependencia
    pub ubicacion_oficina: Option<String>,
    /// Name of the equipment status
    pub estado: Option<String>,
}
