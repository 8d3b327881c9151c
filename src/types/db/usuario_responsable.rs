use sea_orm::entity::prelude::*;
use crate::types::catalog::TipoVinculacion;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios_responsables")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub dependencia_id: i32,
    pub nombres_apellidos: String,
    #[sea_orm(unique)]
    pub cedula: String,
    pub correo_personal: Option<String>,
    pub tipo_vinculacion: Option<TipoVinculacion>,
    pub celular: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dependencia::Entity",
        from = "Column::DependenciaId",
        to = "super::dependencia::Column::Id",
        on_delete = "Restrict"
    )]
    Dependencia,
    #[sea_orm(has_many = "super::equipo::Entity")]
    Equipo,
}

impl Related<super::dependencia::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dependencia.def()
    }
}

impl Related<super::equipo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
