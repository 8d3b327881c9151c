use sea_orm::entity::prelude::*;

/// Join row linking a service report to a participating staff member
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reportes_funcionarios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub reporte_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub funcionario_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reporte_servicio::Entity",
        from = "Column::ReporteId",
        to = "super::reporte_servicio::Column::Id",
        on_delete = "Cascade"
    )]
    ReporteServicio,
    #[sea_orm(
        belongs_to = "super::funcionario::Entity",
        from = "Column::FuncionarioId",
        to = "super::funcionario::Column::Id",
        on_delete = "Cascade"
    )]
    Funcionario,
}

impl ActiveModelBehavior for ActiveModel {}
