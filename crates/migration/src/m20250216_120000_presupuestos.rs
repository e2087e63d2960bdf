use sea_orm_migration::prelude::*;

use crate::m20250214_110000_tipos_gasto::TiposGasto;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Presupuestos {
    Table,
    Id,
    TipoGastoId,
    Mes,
    Anio,
    MontoCentavos,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Presupuestos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Presupuestos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Presupuestos::TipoGastoId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Presupuestos::Mes)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Presupuestos::Anio).integer().not_null())
                    .col(
                        ColumnDef::new(Presupuestos::MontoCentavos)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-presupuestos-tipo_gasto_id")
                            .from(Presupuestos::Table, Presupuestos::TipoGastoId)
                            .to(TiposGasto::Table, TiposGasto::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One budget per expense type per month. The engine checks this
        // inside its write transaction; the index closes the races the
        // check cannot see.
        manager
            .create_index(
                Index::create()
                    .name("idx-presupuestos-tipo_gasto_id-mes-anio-unique")
                    .table(Presupuestos::Table)
                    .col(Presupuestos::TipoGastoId)
                    .col(Presupuestos::Mes)
                    .col(Presupuestos::Anio)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Presupuestos::Table).to_owned())
            .await?;
        Ok(())
    }
}
