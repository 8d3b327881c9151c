use sea_orm::entity::prelude::*;
use crate::types::catalog::TipoDispositivo;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "equipos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub usuario_responsable_id: Option<i32>,
    #[sea_orm(indexed)]
    pub estado_equipo_id: Option<i32>,
    pub tipo_dispositivo: Option<TipoDispositivo>,
    #[sea_orm(unique)]
    pub placa_inventario: Option<String>,
    pub marca: String,
    #[sea_orm(unique)]
    pub serial: String,
    pub modelo: Option<String>,
    pub fecha_diligenciamiento: DateTimeUtc,
    pub observaciones_generales: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usuario_responsable::Entity",
        from = "Column::UsuarioResponsableId",
        to = "super::usuario_responsable::Column::Id",
        on_delete = "SetNull"
    )]
    UsuarioResponsable,
    #[sea_orm(
        belongs_to = "super::estado_equipo::Entity",
        from = "Column::EstadoEquipoId",
        to = "super::estado_equipo::Column::Id",
        on_delete = "Restrict"
    )]
    EstadoEquipo,
    #[sea_orm(has_many = "super::periferico::Entity")]
    Periferico,
    #[sea_orm(has_many = "super::hardware_interno::Entity")]
    HardwareInterno,
    #[sea_orm(has_many = "super::software::Entity")]
    Software,
    #[sea_orm(has_one = "super::configuracion_red::Entity")]
    ConfiguracionRed,
    #[sea_orm(has_many = "super::usuario_sistema::Entity")]
    UsuarioSistema,
    #[sea_orm(has_many = "super::acceso_remoto::Entity")]
    AccesoRemoto,
    #[sea_orm(has_many = "super::backup::Entity")]
    Backup,
    #[sea_orm(has_many = "super::reporte_servicio::Entity")]
    ReporteServicio,
}

impl Related<super::usuario_responsable::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsuarioResponsable.def()
    }
}

impl Related<super::estado_equipo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EstadoEquipo.def()
    }
}

impl Related<super::periferico::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Periferico.def()
    }
}

impl Related<super::hardware_interno::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HardwareInterno.def()
    }
}

impl Related<super::software::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Software.def()
    }
}

impl Related<super::configuracion_red::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConfiguracionRed.def()
    }
}

impl Related<super::usuario_sistema::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsuarioSistema.def()
    }
}

impl Related<super::acceso_remoto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccesoRemoto.def()
    }
}

impl Related<super::backup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Backup.def()
    }
}

impl Related<super::reporte_servicio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReporteServicio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
