use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reportes_servicio")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub equipo_id: Option<i32>,
    pub creado_por_id: Option<i32>,
    pub fecha_inicio: DateTimeUtc,
    pub fecha_finalizacion: Option<DateTimeUtc>,
    pub dependencia: String,
    pub ubicacion: String,
    pub diagnostico_falla: Option<String>,
    pub actividad_realizada: String,
    pub observaciones: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::equipo::Entity",
        from = "Column::EquipoId",
        to = "super::equipo::Column::Id",
        on_delete = "SetNull"
    )]
    Equipo,
    #[sea_orm(
        belongs_to = "super::usuario::Entity",
        from = "Column::CreadoPorId",
        to = "super::usuario::Column::Id",
        on_delete = "SetNull"
    )]
    CreadoPor,
    #[sea_orm(has_many = "super::tipo_mantenimiento::Entity")]
    TipoMantenimiento,
    #[sea_orm(has_many = "super::repuesto::Entity")]
    Repuesto,
}

impl Related<super::equipo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipo.def()
    }
}

impl Related<super::usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreadoPor.def()
    }
}

impl Related<super::tipo_mantenimiento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TipoMantenimiento.def()
    }
}

impl Related<super::repuesto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Repuesto.def()
    }
}

impl Related<super::funcionario::Entity> for Entity {
    fn to() -> RelationDef {
        super::reporte_funcionario::Relation::Funcionario.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::reporte_funcionario::Relation::ReporteServicio.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
