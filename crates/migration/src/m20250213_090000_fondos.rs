use sea_orm_migration::prelude::*;

use crate::m20250212_102200_tipos_fondo::TiposFondo;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Fondos {
    Table,
    Id,
    NroCuenta,
    NombreFondo,
    TipoFondoId,
    SaldoCentavos,
    Descripcion,
    Activo,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fondos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Fondos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Fondos::NroCuenta).string().not_null())
                    .col(ColumnDef::new(Fondos::NombreFondo).string().not_null())
                    .col(ColumnDef::new(Fondos::TipoFondoId).integer().not_null())
                    .col(
                        ColumnDef::new(Fondos::SaldoCentavos)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Fondos::Descripcion).string())
                    .col(
                        ColumnDef::new(Fondos::Activo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fondos-tipo_fondo_id")
                            .from(Fondos::Table, Fondos::TipoFondoId)
                            .to(TiposFondo::Table, TiposFondo::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-fondos-nro_cuenta-unique")
                    .table(Fondos::Table)
                    .col(Fondos::NroCuenta)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-fondos-tipo_fondo_id")
                    .table(Fondos::Table)
                    .col(Fondos::TipoFondoId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fondos::Table).to_owned())
            .await?;
        Ok(())
    }
}
