use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dependencias")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub secretaria_id: i32,
    pub nombre: String,
    pub descripcion: String,
    pub ubicacion_oficina: String,
    pub jefe_oficina: String,
    pub correo_institucional: String,
    pub telefono: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::secretaria::Entity",
        from = "Column::SecretariaId",
        to = "super::secretaria::Column::Id",
        on_delete = "Restrict"
    )]
    Secretaria,
    #[sea_orm(has_many = "super::usuario_responsable::Entity")]
    UsuarioResponsable,
}

impl Related<super::secretaria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Secretaria.def()
    }
}

impl Related<super::usuario_responsable::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsuarioResponsable.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
