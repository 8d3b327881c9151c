use chrono::{DateTime, Utc};
use poem_openapi::Object;

use crate::types::catalog::{AsignacionIp, CategoriaSoftware, Componente, TipoPeriferico};
use crate::types::db::{
    acceso_remoto, backup, configuracion_red, hardware_interno, periferico, software,
    usuario_sistema,
};
use crate::types::dto::common::format_timestamp;

#[derive(Object, Debug, Clone)]
pub struct PerifericoRequest {
    pub equipo_id: i32,
    pub tipo_periferico: TipoPeriferico,
    pub placa_inventario: Option<String>,
    pub marca: Option<String>,
    pub serial: Option<String>,
}

#[derive(Object, Debug)]
pub struct PerifericoResponse {
    pub id: i32,
    pub equipo_id: i32,
    pub tipo_periferico: TipoPeriferico,
    pub placa_inventario: Option<String>,
    pub marca: Option<String>,
    pub serial: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<periferico::Model> for PerifericoResponse {
    fn from(model: periferico::Model) -> Self {
        Self {
            id: model.id,
            equipo_id: model.equipo_id,
            tipo_periferico: model.tipo_periferico,
            placa_inventario: model.placa_inventario,
            marca: model.marca,
            serial: model.serial,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

/// Internal component of an equipment (disk, memory, processor)
#[derive(Object, Debug, Clone)]
pub struct HardwareInternoRequest {
    pub equipo_id: i32,
    pub componente: Componente,
    /// e.g. SSD, DDR4, Core i5
    pub tecnologia: String,
    /// e.g. 512 GB, 8 GB, 3.2 GHz
    pub capacidad: String,
}

#[derive(Object, Debug)]
pub struct HardwareInternoResponse {
    pub id: i32,
    pub equipo_id: i32,
    pub componente: Componente,
    pub tecnologia: String,
    pub capacidad: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<hardware_interno::Model> for HardwareInternoResponse {
    fn from(model: hardware_interno::Model) -> Self {
        Self {
            id: model.id,
            equipo_id: model.equipo_id,
            componente: model.componente,
            tecnologia: model.tecnologia,
            capacidad: model.capacidad,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

#[derive(Object, Debug, Clone)]
pub struct SoftwareRequest {
    pub equipo_id: i32,
    pub nombre: String,
    pub version: Option<String>,
    pub tipo_licencia: Option<String>,
    pub categoria: Option<CategoriaSoftware>,
}

#[derive(Object, Debug)]
pub struct SoftwareResponse {
    pub id: i32,
    pub equipo_id: i32,
    pub nombre: String,
    pub version: Option<String>,
    pub tipo_licencia: Option<String>,
    pub categoria: Option<CategoriaSoftware>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<software::Model> for SoftwareResponse {
    fn from(model: software::Model) -> Self {
        Self {
            id: model.id,
            equipo_id: model.equipo_id,
            nombre: model.nombre,
            version: model.version,
            tipo_licencia: model.tipo_licencia,
            categoria: model.categoria,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

/// Network configuration, at most one per equipment
#[derive(Object, Debug, Clone)]
pub struct ConfiguracionRedRequest {
    pub equipo_id: i32,
    pub direccion_ip: String,
    pub asignacion_ip: Option<AsignacionIp>,
    /// Hostname on the network
    pub nombre_dispositivo: String,
    pub conectividad: Option<String>,
}

#[derive(Object, Debug)]
pub struct ConfiguracionRedResponse {
    pub id: i32,
    pub equipo_id: i32,
    pub direccion_ip: String,
    pub asignacion_ip: Option<AsignacionIp>,
    pub nombre_dispositivo: String,
    pub conectividad: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<configuracion_red::Model> for ConfiguracionRedResponse {
    fn from(model: configuracion_red::Model) -> Self {
        Self {
            id: model.id,
            equipo_id: model.equipo_id,
            direccion_ip: model.direccion_ip,
            asignacion_ip: model.asignacion_ip,
            nombre_dispositivo: model.nombre_dispositivo,
            conectividad: model.conectividad,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

/// Operating-system account configured on an equipment
#[derive(Object, Debug, Clone)]
pub struct UsuarioSistemaRequest {
    pub equipo_id: i32,
    /// Unique per equipment
    pub nombre_usuario: String,
    pub contrasena: Option<String>,
    /// Defaults to false
    pub es_administrador: Option<bool>,
}

#[derive(Object, Debug)]
pub struct UsuarioSistemaResponse {
    pub id: i32,
    pub equipo_id: i32,
    pub nombre_usuario: String,
    pub contrasena: Option<String>,
    pub es_administrador: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<usuario_sistema::Model> for UsuarioSistemaResponse {
    fn from(model: usuario_sistema::Model) -> Self {
        Self {
            id: model.id,
            equipo_id: model.equipo_id,
            nombre_usuario: model.nombre_usuario,
            contrasena: model.contrasena,
            es_administrador: model.es_administrador,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

#[derive(Object, Debug, Clone)]
pub struct AccesoRemotoRequest {
    pub equipo_id: i32,
    /// Remote desktop tool, "AnyDesk" when omitted
    pub plataforma: Option<String>,
    pub usuario: String,
    pub contrasena: Option<String>,
    /// Connection id shown by the remote desktop tool
    pub id_conexion: String,
}

#[derive(Object, Debug)]
pub struct AccesoRemotoResponse {
    pub id: i32,
    pub equipo_id: i32,
    pub plataforma: String,
    pub usuario: String,
    pub contrasena: Option<String>,
    pub id_conexion: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<acceso_remoto::Model> for AccesoRemotoResponse {
    fn from(model: acceso_remoto::Model) -> Self {
        Self {
            id: model.id,
            equipo_id: model.equipo_id,
            plataforma: model.plataforma,
            usuario: model.usuario,
            contrasena: model.contrasena,
            id_conexion: model.id_conexion,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

#[derive(Object, Debug, Clone)]
pub struct BackupRequest {
    pub equipo_id: i32,
    /// Defaults to now
    pub fecha: Option<DateTime<Utc>>,
    pub num_carpetas: Option<i32>,
    pub peso_total_archivos: Option<String>,
    pub ruta_backup: String,
    pub se_realizo_backup: bool,
}

#[derive(Object, Debug)]
pub struct BackupResponse {
    pub id: i32,
    pub equipo_id: i32,
    pub fecha: DateTime<Utc>,
    pub num_carpetas: Option<i32>,
    pub peso_total_archivos: Option<String>,
    pub ruta_backup: String,
    pub se_realizo_backup: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<backup::Model> for BackupResponse {
    fn from(model: backup::Model) -> Self {
        Self {
            id: model.id,
            equipo_id: model.equipo_id,
            fecha: model.fecha,
            num_carpetas: model.num_carpetas,
            peso_total_archivos: model.peso_total_archivos,
            ruta_backup: model.ruta_backup,
            se_realizo_backup: model.se_realizo_backup,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}
