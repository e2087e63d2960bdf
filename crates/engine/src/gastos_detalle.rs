use sea_orm::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gastos_detalle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub gasto_encabezado_id: i32,
    pub tipo_gasto_id: i32,
    pub monto_centavos: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gastos_encabezado::Entity",
        from = "Column::GastoEncabezadoId",
        to = "super::gastos_encabezado::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    GastosEncabezado,
    #[sea_orm(
        belongs_to = "super::tipos_gasto::Entity",
        from = "Column::TipoGastoId",
        to = "super::tipos_gasto::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TiposGasto,
}

impl Related<super::gastos_encabezado::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GastosEncabezado.def()
    }
}

impl Related<super::tipos_gasto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TiposGasto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
