//! Closed value sets shared by the database entities and the API payloads.
//!
//! Each enum is stored as its display string and exposed under the same
//! string in the OpenAPI schema, so a value outside the set is rejected while
//! the request body is parsed.

use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, poem_openapi::Enum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TipoDispositivo {
    #[sea_orm(string_value = "Todo en Uno")]
    #[oai(rename = "Todo en Uno")]
    TodoEnUno,
    #[sea_orm(string_value = "Escritorio")]
    #[oai(rename = "Escritorio")]
    Escritorio,
    #[sea_orm(string_value = "Portátil")]
    #[oai(rename = "Portátil")]
    Portatil,
    #[sea_orm(string_value = "Impresora")]
    #[oai(rename = "Impresora")]
    Impresora,
    #[sea_orm(string_value = "Escáner")]
    #[oai(rename = "Escáner")]
    Escaner,
    #[sea_orm(string_value = "Otro")]
    #[oai(rename = "Otro")]
    Otro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, poem_openapi::Enum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TipoPeriferico {
    #[sea_orm(string_value = "Teclado")]
    #[oai(rename = "Teclado")]
    Teclado,
    #[sea_orm(string_value = "Mouse")]
    #[oai(rename = "Mouse")]
    Mouse,
    #[sea_orm(string_value = "Monitor")]
    #[oai(rename = "Monitor")]
    Monitor,
    #[sea_orm(string_value = "Otros")]
    #[oai(rename = "Otros")]
    Otros,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, poem_openapi::Enum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Componente {
    #[sea_orm(string_value = "Disco Duro")]
    #[oai(rename = "Disco Duro")]
    DiscoDuro,
    #[sea_orm(string_value = "Memoria RAM")]
    #[oai(rename = "Memoria RAM")]
    MemoriaRam,
    #[sea_orm(string_value = "Procesador")]
    #[oai(rename = "Procesador")]
    Procesador,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, poem_openapi::Enum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum CategoriaSoftware {
    #[sea_orm(string_value = "Sistema Operativo")]
    #[oai(rename = "Sistema Operativo")]
    SistemaOperativo,
    #[sea_orm(string_value = "Paquete de Oficina")]
    #[oai(rename = "Paquete de Oficina")]
    PaqueteOficina,
    #[sea_orm(string_value = "Navegador Web")]
    #[oai(rename = "Navegador Web")]
    NavegadorWeb,
    #[sea_orm(string_value = "Otro")]
    #[oai(rename = "Otro")]
    Otro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, poem_openapi::Enum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AsignacionIp {
    #[sea_orm(string_value = "Manual")]
    #[oai(rename = "Manual")]
    Manual,
    #[sea_orm(string_value = "Automatica")]
    #[oai(rename = "Automatica")]
    Automatica,
    #[sea_orm(string_value = "Dinamica")]
    #[oai(rename = "Dinamica")]
    Dinamica,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, poem_openapi::Enum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TipoVinculacion {
    #[sea_orm(string_value = "Planta")]
    #[oai(rename = "Planta")]
    Planta,
    #[sea_orm(string_value = "Contratista")]
    #[oai(rename = "Contratista")]
    Contratista,
    #[sea_orm(string_value = "Otro")]
    #[oai(rename = "Otro")]
    Otro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, poem_openapi::Enum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TipoFuncionario {
    #[sea_orm(string_value = "FUNCIONARIO")]
    #[oai(rename = "FUNCIONARIO")]
    Funcionario,
    #[sea_orm(string_value = "CONTRATISTA")]
    #[oai(rename = "CONTRATISTA")]
    Contratista,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, poem_openapi::Enum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AreaFuncionario {
    #[sea_orm(string_value = "SERVICIO")]
    #[oai(rename = "SERVICIO")]
    Servicio,
    #[sea_orm(string_value = "SISTEMAS")]
    #[oai(rename = "SISTEMAS")]
    Sistemas,
}

/// Preventive or corrective maintenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, poem_openapi::Enum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ClaseMantenimiento {
    #[sea_orm(string_value = "PREVENTIVO")]
    #[oai(rename = "PREVENTIVO")]
    Preventivo,
    #[sea_orm(string_value = "CORRECTIVO")]
    #[oai(rename = "CORRECTIVO")]
    Correctivo,
}

/// Role of a system user, carried in the access token
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, poem_openapi::Enum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Rol {
    #[sea_orm(string_value = "admin")]
    #[oai(rename = "admin")]
    Admin,
    #[sea_orm(string_value = "usuario")]
    #[oai(rename = "usuario")]
    Usuario,
    #[sea_orm(string_value = "tecnico")]
    #[oai(rename = "tecnico")]
    Tecnico,
}

impl Default for Rol {
    fn default() -> Self {
        Rol::Usuario
    }
}

/// Display string of any catalog value, as stored in the database
pub fn label<E: ActiveEnum<Value = String>>(value: &E) -> String {
    value.to_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_stored_strings() {
        assert_eq!(label(&TipoDispositivo::Portatil), "Portátil");
        assert_eq!(label(&Componente::MemoriaRam), "Memoria RAM");
        assert_eq!(label(&ClaseMantenimiento::Correctivo), "CORRECTIVO");
        assert_eq!(label(&Rol::Tecnico), "tecnico");
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        assert!(TipoPeriferico::try_from_value(&"Parlante".to_string()).is_err());
        assert_eq!(
            AsignacionIp::try_from_value(&"Dinamica".to_string()).unwrap(),
            AsignacionIp::Dinamica
        );
    }

    #[test]
    fn test_default_rol_is_usuario() {
        assert_eq!(Rol::default(), Rol::Usuario);
    }
}
