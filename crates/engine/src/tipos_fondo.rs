use sea_orm::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tipos_fondo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fondos::Entity")]
    Fondos,
}

impl Related<super::fondos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fondos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
