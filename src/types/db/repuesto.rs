use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "repuestos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub reporte_id: Option<i32>,
    pub cantidad: i32,
    pub serial_numero_parte: String,
    pub marca: Option<String>,
    pub tecnologia: Option<String>,
    pub capacidad: Option<String>,
    pub descripcion: String,
    pub fecha_utilizacion: DateTimeUtc,
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
