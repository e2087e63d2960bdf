use sea_orm::prelude::*;

/// An expense category. `codigo` is assigned once on create ("TG001",
/// "TG002", ...) and never updated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tipos_gasto")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gastos_detalle::Entity")]
    GastosDetalle,
    #[sea_orm(has_many = "super::presupuestos::Entity")]
    Presupuestos,
}

impl Related<super::gastos_detalle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GastosDetalle.def()
    }
}

impl Related<super::presupuestos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Presupuestos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
