use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "secretarias")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
    pub ubicacion: String,
    pub secretario: String,
    pub telefono: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dependencia::Entity")]
    Dependencia,
}

impl Related<super::dependencia::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dependencia.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
