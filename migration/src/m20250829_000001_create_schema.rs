use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Users table: merchant ("comercio") and admin accounts
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::PasswordHash)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Users::Role)
                            .string()
                            .not_null()
                            .default("USER"),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .to_owned(),
            )
            .await?;

        // Deudores table: debtors addressed by their national ID (DNI)
        manager
            .create_table(
                Table::create()
                    .table(Deudores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Deudores::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Deudores::Dni)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Deudores::Nombre)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Deudores::Apellido)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_deudores_dni")
                    .table(Deudores::Table)
                    .col(Deudores::Dni)
                    .to_owned(),
            )
            .await?;

        // Deudas table: one debt, owned by one comercio, referencing one deudor
        manager
            .create_table(
                Table::create()
                    .table(Deudas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Deudas::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Deudas::Monto)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Deudas::Descripcion)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Deudas::ComercioId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Deudas::DeudorId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Deudas::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deudas_comercio_id")
                            .from(Deudas::Table, Deudas::ComercioId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deudas_deudor_id")
                            .from(Deudas::Table, Deudas::DeudorId)
                            .to(Deudores::Table, Deudores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_deudas_comercio_id")
                    .table(Deudas::Table)
                    .col(Deudas::ComercioId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_deudas_deudor_id")
                    .table(Deudas::Table)
                    .col(Deudas::DeudorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Deudas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Deudores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Deudores {
    Table,
    Id,
    Dni,
    Nombre,
    Apellido,
}

#[derive(DeriveIden)]
enum Deudas {
    Table,
    Id,
    Monto,
    Descripcion,
    ComercioId,
    DeudorId,
    CreatedAt,
}
