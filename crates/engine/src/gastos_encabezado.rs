use sea_orm::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gastos_encabezado")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fecha: DateTimeUtc,
    pub fondo_id: i32,
    pub observaciones: Option<String>,
    pub nombre_comercio: String,
    pub tipo_documento: String,
    pub total_centavos: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fondos::Entity",
        from = "Column::FondoId",
        to = "super::fondos::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Fondos,
    #[sea_orm(has_many = "super::gastos_detalle::Entity")]
    GastosDetalle,
}

impl Related<super::fondos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fondos.def()
    }
}

impl Related<super::gastos_detalle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GastosDetalle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
