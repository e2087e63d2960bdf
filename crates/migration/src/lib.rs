pub use sea_orm_migration::prelude::*;

mod m20250212_101500_usuarios;
mod m20250212_102200_tipos_fondo;
mod m20250213_090000_fondos;
mod m20250213_154500_depositos;
mod m20250214_110000_tipos_gasto;
mod m20250215_093000_gastos;
mod m20250216_120000_presupuestos;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250212_101500_usuarios::Migration),
            Box::new(m20250212_102200_tipos_fondo::Migration),
            Box::new(m20250213_090000_fondos::Migration),
            Box::new(m20250213_154500_depositos::Migration),
            Box::new(m20250214_110000_tipos_gasto::Migration),
            Box::new(m20250215_093000_gastos::Migration),
            Box::new(m20250216_120000_presupuestos::Migration),
        ]
    }
}
