use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Secretarias::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Secretarias::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Secretarias::Nombre).string().not_null())
                    .col(ColumnDef::new(Secretarias::Descripcion).string().not_null())
                    .col(ColumnDef::new(Secretarias::Ubicacion).string().not_null())
                    .col(ColumnDef::new(Secretarias::Secretario).string().not_null())
                    .col(ColumnDef::new(Secretarias::Telefono).string().null())
                    .col(ColumnDef::new(Secretarias::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Secretarias::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Dependencias::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Dependencias::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Dependencias::SecretariaId).integer().not_null())
                    .col(ColumnDef::new(Dependencias::Nombre).string().not_null())
                    .col(ColumnDef::new(Dependencias::Descripcion).string().not_null())
                    .col(ColumnDef::new(Dependencias::UbicacionOficina).string().not_null())
                    .col(ColumnDef::new(Dependencias::JefeOficina).string().not_null())
                    .col(ColumnDef::new(Dependencias::CorreoInstitucional).string().not_null())
                    .col(ColumnDef::new(Dependencias::Telefono).string().null())
                    .col(ColumnDef::new(Dependencias::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Dependencias::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dependencias_secretaria_id")
                            .from(Dependencias::Table, Dependencias::SecretariaId)
                            .to(Secretarias::Table, Secretarias::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dependencias_secretaria_id")
                    .table(Dependencias::Table)
                    .col(Dependencias::SecretariaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UsuariosResponsables::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UsuariosResponsables::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(UsuariosResponsables::DependenciaId).integer().not_null())
                    .col(ColumnDef::new(UsuariosResponsables::NombresApellidos).string().not_null())
                    .col(ColumnDef::new(UsuariosResponsables::Cedula).string().not_null().unique_key())
                    .col(ColumnDef::new(UsuariosResponsables::CorreoPersonal).string().null())
                    .col(ColumnDef::new(UsuariosResponsables::TipoVinculacion).string().null())
                    .col(ColumnDef::new(UsuariosResponsables::Celular).string().null())
                    .col(ColumnDef::new(UsuariosResponsables::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(UsuariosResponsables::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usuarios_responsables_dependencia_id")
                            .from(UsuariosResponsables::Table, UsuariosResponsables::DependenciaId)
                            .to(Dependencias::Table, Dependencias::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_usuarios_responsables_dependencia_id")
                    .table(UsuariosResponsables::Table)
                    .col(UsuariosResponsables::DependenciaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EstadosEquipo::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(EstadosEquipo::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(EstadosEquipo::Nombre).string_len(50).not_null().unique_key())
                    .col(ColumnDef::new(EstadosEquipo::Descripcion).string_len(255).not_null())
                    .col(ColumnDef::new(EstadosEquipo::Activo).boolean().not_null().default(true))
                    .col(ColumnDef::new(EstadosEquipo::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(EstadosEquipo::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EstadosEquipo::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UsuariosResponsables::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Dependencias::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Secretarias::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Secretarias {
    Table,
    Id,
    Nombre,
    Descripcion,
    Ubicacion,
    Secretario,
    Telefono,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Dependencias {
    Table,
    Id,
    SecretariaId,
    Nombre,
    Descripcion,
    UbicacionOficina,
    JefeOficina,
    CorreoInstitucional,
    Telefono,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UsuariosResponsables {
    Table,
    Id,
    DependenciaId,
    NombresApellidos,
    Cedula,
    CorreoPersonal,
    TipoVinculacion,
    Celular,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EstadosEquipo {
    Table,
    Id,
    Nombre,
    Descripcion,
    Activo,
    CreatedAt,
    UpdatedAt,
}
