use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create usuarios table
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Usuarios::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Usuarios::Nombre).string().not_null())
                    .col(ColumnDef::new(Usuarios::Apellido).string().not_null())
                    .col(ColumnDef::new(Usuarios::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Usuarios::Username).string().not_null().unique_key())
                    .col(ColumnDef::new(Usuarios::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Usuarios::Rol)
                            .string()
                            .not_null()
                            .default("usuario")
                            .check(Expr::col(Usuarios::Rol).is_in(["admin", "usuario", "tecnico"])),
                    )
                    .col(ColumnDef::new(Usuarios::Activo).boolean().not_null().default(true))
                    .col(ColumnDef::new(Usuarios::Cedula).string().null())
                    .col(ColumnDef::new(Usuarios::UltimoLogin).big_integer().null())
                    .col(ColumnDef::new(Usuarios::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Usuarios::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create refresh_tokens table
        manager
            .create_table(
                Table::create()
                    .table(RefreshTokens::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RefreshTokens::TokenHash).string().not_null().primary_key())
                    .col(ColumnDef::new(RefreshTokens::UsuarioId).integer().not_null())
                    .col(ColumnDef::new(RefreshTokens::ExpiresAt).big_integer().not_null())
                    .col(ColumnDef::new(RefreshTokens::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_refresh_tokens_usuario_id")
                            .from(RefreshTokens::Table, RefreshTokens::UsuarioId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_refresh_tokens_usuario_id")
                    .table(RefreshTokens::Table)
                    .col(RefreshTokens::UsuarioId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_refresh_tokens_expires_at")
                    .table(RefreshTokens::Table)
                    .col(RefreshTokens::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RefreshTokens::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Usuarios {
    Table,
    Id,
    Nombre,
    Apellido,
    Email,
    Username,
    PasswordHash,
    Rol,
    Activo,
    Cedula,
    UltimoLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RefreshTokens {
    Table,
    TokenHash,
    UsuarioId,
    ExpiresAt,
    CreatedAt,
}
