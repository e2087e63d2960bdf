use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum TiposGasto {
    Table,
    Id,
    Codigo,
    Nombre,
    Descripcion,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TiposGasto::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TiposGasto::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TiposGasto::Codigo).string().not_null())
                    .col(ColumnDef::new(TiposGasto::Nombre).string().not_null())
                    .col(ColumnDef::new(TiposGasto::Descripcion).string())
                    .to_owned(),
            )
            .await?;

        // Codigo is assigned by the engine and never reused; the unique
        // index backstops the atomic claim on concurrent creates.
        manager
            .create_index(
                Index::create()
                    .name("idx-tipos_gasto-codigo-unique")
                    .table(TiposGasto::Table)
                    .col(TiposGasto::Codigo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-tipos_gasto-nombre-unique")
                    .table(TiposGasto::Table)
                    .col(TiposGasto::Nombre)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TiposGasto::Table).to_owned())
            .await?;
        Ok(())
    }
}
