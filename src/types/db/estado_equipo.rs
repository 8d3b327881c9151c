use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "estados_equipo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nombre: String,
    pub descripcion: String,
    pub activo: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::equipo::Entity")]
    Equipo,
}

impl Related<super::equipo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
