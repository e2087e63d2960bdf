use sea_orm::prelude::*;

/// A spending ceiling for one expense type in one month. The
/// (tipo_gasto_id, mes, anio) trio is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "presupuestos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tipo_gasto_id: i32,
    pub mes: i16,
    pub anio: i32,
    pub monto_centavos: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tipos_gasto::Entity",
        from = "Column::TipoGastoId",
        to = "super::tipos_gasto::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TiposGasto,
}

impl Related<super::tipos_gasto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TiposGasto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
