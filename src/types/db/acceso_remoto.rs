use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accesos_remotos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub equipo_id: i32,
    pub plataforma: String,
    pub usuario: String,
    pub contrasena: Option<String>,
    pub id_conexion: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::equipo::Entity",
        from = "Column::EquipoId",
        to = "super::equipo::Column::Id",
        on_delete = "Cascade"
    )]
    Equipo,
}

impl Related<super::equipo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
