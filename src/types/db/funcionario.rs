use sea_orm::entity::prelude::*;
use crate::types::catalog::{AreaFuncionario, TipoFuncionario};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "funcionarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub cargo: String,
    #[sea_orm(unique)]
    pub cedula: String,
    pub tipo: TipoFuncionario,
    pub area: AreaFuncionario,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::reporte_servicio::Entity> for Entity {
    fn to() -> RelationDef {
        super::reporte_funcionario::Relation::ReporteServicio.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::reporte_funcionario::Relation::Funcionario.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
