use sea_orm_migration::prelude::*;

use crate::m20250213_090000_fondos::Fondos;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Depositos {
    Table,
    Id,
    Fecha,
    FondoId,
    MontoCentavos,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Depositos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Depositos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Depositos::Fecha).timestamp().not_null())
                    .col(ColumnDef::new(Depositos::FondoId).integer().not_null())
                    .col(
                        ColumnDef::new(Depositos::MontoCentavos)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-depositos-fondo_id")
                            .from(Depositos::Table, Depositos::FondoId)
                            .to(Fondos::Table, Fondos::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-depositos-fecha")
                    .table(Depositos::Table)
                    .col(Depositos::Fecha)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-depositos-fondo_id")
                    .table(Depositos::Table)
                    .col(Depositos::FondoId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Depositos::Table).to_owned())
            .await?;
        Ok(())
    }
}
