use sea_orm::entity::prelude::*;
use crate::types::catalog::ClaseMantenimiento;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tipos_mantenimiento")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
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
    pub created_at: i64,
    pub updated_at: i64,
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
}

impl Related<super::reporte_servicio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReporteServicio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
