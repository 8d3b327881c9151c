use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Funcionarios::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Funcionarios::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Funcionarios::Nombre).string().not_null())
                    .col(ColumnDef::new(Funcionarios::Cargo).string().not_null())
                    .col(ColumnDef::new(Funcionarios::Cedula).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Funcionarios::Tipo)
                            .string()
                            .not_null()
                            .check(Expr::col(Funcionarios::Tipo).is_in(["FUNCIONARIO", "CONTRATISTA"])),
                    )
                    .col(
                        ColumnDef::new(Funcionarios::Area)
                            .string()
                            .not_null()
                            .check(Expr::col(Funcionarios::Area).is_in(["SERVICIO", "SISTEMAS"])),
                    )
                    .col(ColumnDef::new(Funcionarios::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Funcionarios::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReportesServicio::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ReportesServicio::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(ReportesServicio::EquipoId).integer().null())
                    .col(ColumnDef::new(ReportesServicio::CreadoPorId).integer().null())
                    .col(ColumnDef::new(ReportesServicio::FechaInicio).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(ReportesServicio::FechaFinalizacion).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(ReportesServicio::Dependencia).string().not_null())
                    .col(ColumnDef::new(ReportesServicio::Ubicacion).string().not_null())
                    .col(ColumnDef::new(ReportesServicio::DiagnosticoFalla).text().null())
                    .col(ColumnDef::new(ReportesServicio::ActividadRealizada).text().not_null())
                    .col(ColumnDef::new(ReportesServicio::Observaciones).text().null())
                    .col(ColumnDef::new(ReportesServicio::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(ReportesServicio::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reportes_servicio_equipo_id")
                            .from(ReportesServicio::Table, ReportesServicio::EquipoId)
                            .to(Equipos::Table, Equipos::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reportes_servicio_creado_por_id")
                            .from(ReportesServicio::Table, ReportesServicio::CreadoPorId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reportes_servicio_equipo_id")
                    .table(ReportesServicio::Table)
                    .col(ReportesServicio::EquipoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TiposMantenimiento::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TiposMantenimiento::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(TiposMantenimiento::ReporteId).integer().not_null())
                    .col(
                        ColumnDef::new(TiposMantenimiento::Tipo)
                            .string()
                            .not_null()
                            .check(Expr::col(TiposMantenimiento::Tipo).is_in(["PREVENTIVO", "CORRECTIVO"])),
                    )
                    .col(ColumnDef::new(TiposMantenimiento::Revision).boolean().not_null().default(false))
                    .col(ColumnDef::new(TiposMantenimiento::Instalacion).boolean().not_null().default(false))
                    .col(ColumnDef::new(TiposMantenimiento::Configuracion).boolean().not_null().default(false))
                    .col(ColumnDef::new(TiposMantenimiento::Ingreso).boolean().not_null().default(false))
                    .col(ColumnDef::new(TiposMantenimiento::Salida).boolean().not_null().default(false))
                    .col(ColumnDef::new(TiposMantenimiento::ConceptoBaja).boolean().not_null().default(false))
                    .col(ColumnDef::new(TiposMantenimiento::Otro).boolean().not_null().default(false))
                    .col(ColumnDef::new(TiposMantenimiento::DescripcionOtro).string().null())
                    .col(ColumnDef::new(TiposMantenimiento::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(TiposMantenimiento::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tipos_mantenimiento_reporte_id")
                            .from(TiposMantenimiento::Table, TiposMantenimiento::ReporteId)
                            .to(ReportesServicio::Table, ReportesServicio::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Repuestos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Repuestos::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Repuestos::ReporteId).integer().null())
                    .col(
                        ColumnDef::new(Repuestos::Cantidad)
                            .integer()
                            .not_null()
                            .check(Expr::col(Repuestos::Cantidad).gt(0)),
                    )
                    .col(ColumnDef::new(Repuestos::SerialNumeroParte).string().not_null())
                    .col(ColumnDef::new(Repuestos::Marca).string().null())
                    .col(ColumnDef::new(Repuestos::Tecnologia).string().null())
                    .col(ColumnDef::new(Repuestos::Capacidad).string().null())
                    .col(ColumnDef::new(Repuestos::Descripcion).string().not_null())
                    .col(ColumnDef::new(Repuestos::FechaUtilizacion).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Repuestos::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Repuestos::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_repuestos_reporte_id")
                            .from(Repuestos::Table, Repuestos::ReporteId)
                            .to(ReportesServicio::Table, ReportesServicio::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReportesFuncionarios::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ReportesFuncionarios::ReporteId).integer().not_null())
                    .col(ColumnDef::new(ReportesFuncionarios::FuncionarioId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ReportesFuncionarios::ReporteId)
                            .col(ReportesFuncionarios::FuncionarioId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reportes_funcionarios_reporte_id")
                            .from(ReportesFuncionarios::Table, ReportesFuncionarios::ReporteId)
                            .to(ReportesServicio::Table, ReportesServicio::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reportes_funcionarios_funcionario_id")
                            .from(ReportesFuncionarios::Table, ReportesFuncionarios::FuncionarioId)
                            .to(Funcionarios::Table, Funcionarios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReportesFuncionarios::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Repuestos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TiposMantenimiento::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReportesServicio::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Funcionarios::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Equipos {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Usuarios {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Funcionarios {
    Table,
    Id,
    Nombre,
    Cargo,
    Cedula,
    Tipo,
    Area,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ReportesServicio {
    Table,
    Id,
    EquipoId,
    CreadoPorId,
    FechaInicio,
    FechaFinalizacion,
    Dependencia,
    Ubicacion,
    DiagnosticoFalla,
    ActividadRealizada,
    Observaciones,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TiposMantenimiento {
    Table,
    Id,
    ReporteId,
    Tipo,
    Revision,
    Instalacion,
    Configuracion,
    Ingreso,
    Salida,
    ConceptoBaja,
    Otro,
    DescripcionOtro,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Repuestos {
    Table,
    Id,
    ReporteId,
    Cantidad,
    SerialNumeroParte,
    Marca,
    Tecnologia,
    Capacidad,
    Descripcion,
    FechaUtilizacion,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ReportesFuncionarios {
    Table,
    ReporteId,
    FuncionarioId,
}
