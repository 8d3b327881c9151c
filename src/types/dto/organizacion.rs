use poem_openapi::Object;

use crate::types::catalog::TipoVinculacion;
use crate::types::db::{dependencia, estado_equipo, secretaria, usuario_responsable};
use crate::types::dto::common::format_timestamp;

/// Request body for creating or replacing a secretaría
#[derive(Object, Debug, Clone)]
pub struct SecretariaRequest {
    /// Name of the secretariat
    pub nombre: String,

    /// What the secretariat is responsible for
    pub descripcion: String,

    /// Building and floor
    pub ubicacion: String,

    /// Name of the secretary in charge
    pub secretario: String,

    /// Contact phone
    pub telefono: Option<String>,
}

#[derive(Object, Debug)]
pub struct SecretariaResponse {
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
    pub ubicacion: String,
    pub secretario: String,
    pub telefono: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<secretaria::Model> for SecretariaResponse {
    fn from(model: secretaria::Model) -> Self {
        Self {
            id: model.id,
            nombre: model.nombre,
            descripcion: model.descripcion,
            ubicacion: model.ubicacion,
            secretario: model.secretario,
            telefono: model.telefono,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

/// Request body for creating or replacing a dependencia
#[derive(Object, Debug, Clone)]
pub struct DependenciaRequest {
    /// Owning secretaría, must exist
    pub secretaria_id: i32,
    pub nombre: String,
    pub descripcion: String,
    pub ubicacion_oficina: String,
    pub jefe_oficina: String,
    pub correo_institucional: String,
    pub telefono: Option<String>,
}

#[derive(Object, Debug)]
pub struct DependenciaResponse {
    pub id: i32,
    pub secretaria_id: i32,
    pub nombre: String,
    pub descripcion: String,
    pub ubicacion_oficina: String,
    pub jefe_oficina: String,
    pub correo_institucional: String,
    pub telefono: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<dependencia::Model> for DependenciaResponse {
    fn from(model: dependencia::Model) -> Self {
        Self {
            id: model.id,
            secretaria_id: model.secretaria_id,
            nombre: model.nombre,
            descripcion: model.descripcion,
            ubicacion_oficina: model.ubicacion_oficina,
            jefe_oficina: model.jefe_oficina,
            correo_institucional: model.correo_institucional,
            telefono: model.telefono,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

/// Request body for creating or replacing a usuario responsable
#[derive(Object, Debug, Clone)]
pub struct UsuarioResponsableRequest {
    /// Dependencia the person works in, must exist
    pub dependencia_id: i32,

    /// Full name
    pub nombres_apellidos: String,

    /// National id number, unique across responsible users
    pub cedula: String,

    pub correo_personal: Option<String>,

    /// Employment relationship
    pub tipo_vinculacion: Option<TipoVinculacion>,

    pub celular: Option<String>,
}

#[derive(Object, Debug)]
pub struct UsuarioResponsableResponse {
    pub id: i32,
    pub dependencia_id: i32,
    pub nombres_apellidos: String,
    pub cedula: String,
    pub correo_personal: Option<String>,
    pub tipo_vinculacion: Option<TipoVinculacion>,
    pub celular: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<usuario_responsable::Model> for UsuarioResponsableResponse {
    fn from(model: usuario_responsable::Model) -> Self {
        Self {
            id: model.id,
            dependencia_id: model.dependencia_id,
            nombres_apellidos: model.nombres_apellidos,
            cedula: model.cedula,
            correo_personal: model.correo_personal,
            tipo_vinculacion: model.tipo_vinculacion,
            celular: model.celular,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

/// Request body for creating or replacing an equipment status
#[derive(Object, Debug, Clone)]
pub struct EstadoEquipoRequest {
    /// Unique status name (3-50 characters)
    pub nombre: String,

    /// Description (5-255 characters)
    pub descripcion: String,

    /// Defaults to true
    pub activo: Option<bool>,
}

#[derive(Object, Debug)]
pub struct EstadoEquipoResponse {
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
    pub activo: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<estado_equipo::Model> for EstadoEquipoResponse {
    fn from(model: estado_equipo::Model) -> Self {
        Self {
            id: model.id,
            nombre: model.nombre,
            descripcion: model.descripcion,
            activo: model.activo,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}
