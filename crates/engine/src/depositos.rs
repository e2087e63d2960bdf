use sea_orm::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "depositos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fecha: DateTimeUtc,
    pub fondo_id: i32,
    pub monto_centavos: i64,
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
}

impl Related<super::fondos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fondos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
