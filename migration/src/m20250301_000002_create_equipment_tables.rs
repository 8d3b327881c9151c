use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Foreign key from a child table to `equipos`, removed together with its equipment
fn equipo_fk(name: &str, table: impl IntoIden + 'static, column: impl IntoIden + 'static) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(Equipos::Table, Equipos::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Equipos::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Equipos::UsuarioResponsableId).integer().null())
                    .col(ColumnDef::new(Equipos::EstadoEquipoId).integer().null())
                    .col(
                        ColumnDef::new(Equipos::TipoDispositivo)
                            .string()
                            .null()
                            .check(Expr::col(Equipos::TipoDispositivo).is_in([
                                "Todo en Uno",
                                "Escritorio",
                                "Portátil",
                                "Impresora",
                                "Escáner",
                                "Otro",
                            ])),
                    )
                    .col(ColumnDef::new(Equipos::PlacaInventario).string().null().unique_key())
                    .col(ColumnDef::new(Equipos::Marca).string().not_null())
                    .col(ColumnDef::new(Equipos::Serial).string().not_null().unique_key())
                    .col(ColumnDef::new(Equipos::Modelo).string().null())
                    .col(ColumnDef::new(Equipos::FechaDiligenciamiento).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Equipos::ObservacionesGenerales).text().null())
                    .col(ColumnDef::new(Equipos::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Equipos::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipos_usuario_responsable_id")
                            .from(Equipos::Table, Equipos::UsuarioResponsableId)
                            .to(UsuariosResponsables::Table, UsuariosResponsables::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipos_estado_equipo_id")
                            .from(Equipos::Table, Equipos::EstadoEquipoId)
                            .to(EstadosEquipo::Table, EstadosEquipo::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_equipos_usuario_responsable_id")
                    .table(Equipos::Table)
                    .col(Equipos::UsuarioResponsableId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_equipos_estado_equipo_id")
                    .table(Equipos::Table)
                    .col(Equipos::EstadoEquipoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Perifericos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Perifericos::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Perifericos::EquipoId).integer().not_null())
                    .col(
                        ColumnDef::new(Perifericos::TipoPeriferico)
                            .string()
                            .not_null()
                            .check(Expr::col(Perifericos::TipoPeriferico).is_in(["Teclado", "Mouse", "Monitor", "Otros"])),
                    )
                    .col(ColumnDef::new(Perifericos::PlacaInventario).string().null())
                    .col(ColumnDef::new(Perifericos::Marca).string().null())
                    .col(ColumnDef::new(Perifericos::Serial).string().null())
                    .col(ColumnDef::new(Perifericos::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Perifericos::UpdatedAt).big_integer().not_null())
                    .foreign_key(&mut equipo_fk("fk_perifericos_equipo_id", Perifericos::Table, Perifericos::EquipoId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HardwareInterno::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(HardwareInterno::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(HardwareInterno::EquipoId).integer().not_null())
                    .col(
                        ColumnDef::new(HardwareInterno::Componente)
                            .string()
                            .not_null()
                            .check(Expr::col(HardwareInterno::Componente).is_in(["Disco Duro", "Memoria RAM", "Procesador"])),
                    )
                    .col(ColumnDef::new(HardwareInterno::Tecnologia).string().not_null())
                    .col(ColumnDef::new(HardwareInterno::Capacidad).string().not_null())
                    .col(ColumnDef::new(HardwareInterno::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(HardwareInterno::UpdatedAt).big_integer().not_null())
                    .foreign_key(&mut equipo_fk("fk_hardware_interno_equipo_id", HardwareInterno::Table, HardwareInterno::EquipoId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Software::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Software::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Software::EquipoId).integer().not_null())
                    .col(ColumnDef::new(Software::Nombre).string().not_null())
                    .col(ColumnDef::new(Software::Version).string().null())
                    .col(ColumnDef::new(Software::TipoLicencia).string().null())
                    .col(ColumnDef::new(Software::Categoria).string().null())
                    .col(ColumnDef::new(Software::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Software::UpdatedAt).big_integer().not_null())
                    .foreign_key(&mut equipo_fk("fk_software_equipo_id", Software::Table, Software::EquipoId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ConfiguracionesRed::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ConfiguracionesRed::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(ConfiguracionesRed::EquipoId).integer().not_null().unique_key())
                    .col(ColumnDef::new(ConfiguracionesRed::DireccionIp).string().not_null())
                    .col(ColumnDef::new(ConfiguracionesRed::AsignacionIp).string().null())
                    .col(ColumnDef::new(ConfiguracionesRed::NombreDispositivo).string().not_null())
                    .col(ColumnDef::new(ConfiguracionesRed::Conectividad).string().null())
                    .col(ColumnDef::new(ConfiguracionesRed::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(ConfiguracionesRed::UpdatedAt).big_integer().not_null())
                    .foreign_key(&mut equipo_fk("fk_configuraciones_red_equipo_id", ConfiguracionesRed::Table, ConfiguracionesRed::EquipoId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UsuariosSistema::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UsuariosSistema::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(UsuariosSistema::EquipoId).integer().not_null())
                    .col(ColumnDef::new(UsuariosSistema::NombreUsuario).string().not_null())
                    .col(ColumnDef::new(UsuariosSistema::Contrasena).string().null())
                    .col(ColumnDef::new(UsuariosSistema::EsAdministrador).boolean().not_null().default(false))
                    .col(ColumnDef::new(UsuariosSistema::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(UsuariosSistema::UpdatedAt).big_integer().not_null())
                    .foreign_key(&mut equipo_fk("fk_usuarios_sistema_equipo_id", UsuariosSistema::Table, UsuariosSistema::EquipoId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_usuarios_sistema_equipo_nombre")
                    .table(UsuariosSistema::Table)
                    .col(UsuariosSistema::EquipoId)
                    .col(UsuariosSistema::NombreUsuario)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccesosRemotos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AccesosRemotos::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(AccesosRemotos::EquipoId).integer().not_null())
                    .col(ColumnDef::new(AccesosRemotos::Plataforma).string().not_null().default("AnyDesk"))
                    .col(ColumnDef::new(AccesosRemotos::Usuario).string().not_null())
                    .col(ColumnDef::new(AccesosRemotos::Contrasena).string().null())
                    .col(ColumnDef::new(AccesosRemotos::IdConexion).string().not_null())
                    .col(ColumnDef::new(AccesosRemotos::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(AccesosRemotos::UpdatedAt).big_integer().not_null())
                    .foreign_key(&mut equipo_fk("fk_accesos_remotos_equipo_id", AccesosRemotos::Table, AccesosRemotos::EquipoId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Backups::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Backups::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Backups::EquipoId).integer().not_null())
                    .col(ColumnDef::new(Backups::Fecha).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Backups::NumCarpetas).integer().null())
                    .col(ColumnDef::new(Backups::PesoTotalArchivos).string().null())
                    .col(ColumnDef::new(Backups::RutaBackup).string().not_null())
                    .col(ColumnDef::new(Backups::SeRealizoBackup).boolean().not_null().default(false))
                    .col(ColumnDef::new(Backups::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Backups::UpdatedAt).big_integer().not_null())
                    .foreign_key(&mut equipo_fk("fk_backups_equipo_id", Backups::Table, Backups::EquipoId))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Backups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AccesosRemotos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UsuariosSistema::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ConfiguracionesRed::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Software::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HardwareInterno::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Perifericos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Equipos::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UsuariosResponsables {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum EstadosEquipo {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Equipos {
    Table,
    Id,
    UsuarioResponsableId,
    EstadoEquipoId,
    TipoDispositivo,
    PlacaInventario,
    Marca,
    Serial,
    Modelo,
    FechaDiligenciamiento,
    ObservacionesGenerales,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Perifericos {
    Table,
    Id,
    EquipoId,
    TipoPeriferico,
    PlacaInventario,
    Marca,
    Serial,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum HardwareInterno {
    Table,
    Id,
    EquipoId,
    Componente,
    Tecnologia,
    Capacidad,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Software {
    Table,
    Id,
    EquipoId,
    Nombre,
    Version,
    TipoLicencia,
    Categoria,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ConfiguracionesRed {
    Table,
    Id,
    EquipoId,
    DireccionIp,
    AsignacionIp,
    NombreDispositivo,
    Conectividad,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UsuariosSistema {
    Table,
    Id,
    EquipoId,
    NombreUsuario,
    Contrasena,
    EsAdministrador,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AccesosRemotos {
    Table,
    Id,
    EquipoId,
    Plataforma,
    Usuario,
    Contrasena,
    IdConexion,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Backups {
    Table,
    Id,
    EquipoId,
    Fecha,
    NumCarpetas,
    PesoTotalArchivos,
    RutaBackup,
    SeRealizoBackup,
    CreatedAt,
    UpdatedAt,
}
