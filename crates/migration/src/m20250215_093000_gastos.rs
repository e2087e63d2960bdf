use sea_orm_migration::prelude::*;

use crate::m20250213_090000_fondos::Fondos;
use crate::m20250214_110000_tipos_gasto::TiposGasto;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum GastosEncabezado {
    Table,
    Id,
    Fecha,
    FondoId,
    Observaciones,
    NombreComercio,
    TipoDocumento,
    TotalCentavos,
}

#[derive(Iden)]
pub enum GastosDetalle {
    Table,
    Id,
    GastoEncabezadoId,
    TipoGastoId,
    MontoCentavos,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GastosEncabezado::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GastosEncabezado::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GastosEncabezado::Fecha)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GastosEncabezado::FondoId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GastosEncabezado::Observaciones).string())
                    .col(
                        ColumnDef::new(GastosEncabezado::NombreComercio)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GastosEncabezado::TipoDocumento)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GastosEncabezado::TotalCentavos)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-gastos_encabezado-fondo_id")
                            .from(GastosEncabezado::Table, GastosEncabezado::FondoId)
                            .to(Fondos::Table, Fondos::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-gastos_encabezado-fecha")
                    .table(GastosEncabezado::Table)
                    .col(GastosEncabezado::Fecha)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GastosDetalle::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GastosDetalle::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GastosDetalle::GastoEncabezadoId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GastosDetalle::TipoGastoId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GastosDetalle::MontoCentavos)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-gastos_detalle-gasto_encabezado_id")
                            .from(GastosDetalle::Table, GastosDetalle::GastoEncabezadoId)
                            .to(GastosEncabezado::Table, GastosEncabezado::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-gastos_detalle-tipo_gasto_id")
                            .from(GastosDetalle::Table, GastosDetalle::TipoGastoId)
                            .to(TiposGasto::Table, TiposGasto::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-gastos_detalle-gasto_encabezado_id")
                    .table(GastosDetalle::Table)
                    .col(GastosDetalle::GastoEncabezadoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-gastos_detalle-tipo_gasto_id")
                    .table(GastosDetalle::Table)
                    .col(GastosDetalle::TipoGastoId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GastosDetalle::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GastosEncabezado::Table).to_owned())
            .await?;
        Ok(())
    }
}
