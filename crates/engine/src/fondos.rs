use sea_orm::prelude::*;

/// A fund. `saldo_centavos` is the running balance maintained by deposit
/// creation; deletes only clear `activo`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fondos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nro_cuenta: String,
    pub nombre_fondo: String,
    pub tipo_fondo_id: i32,
    pub saldo_centavos: i64,
    pub descripcion: Option<String>,
    pub activo: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tipos_fondo::Entity",
        from = "Column::TipoFondoId",
        to = "super::tipos_fondo::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TiposFondo,
    #[sea_orm(has_many = "super::depositos::Entity")]
    Depositos,
    #[sea_orm(has_many = "super::gastos_encabezado::Entity")]
    GastosEncabezado,
}

impl Related<super::tipos_fondo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TiposFondo.def()
    }
}

impl Related<super::depositos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Depositos.def()
    }
}

impl Related<super::gastos_encabezado::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GastosEncabezado.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
