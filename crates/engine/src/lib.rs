pub use error::EngineError;
pub use money::Monto;
pub use ops::{
    DepositoConFondo, DepositoInput, Engine, EngineBuilder, FilaDatosDetalle, FondoConTipo,
    FondoInput, GastoConFondo, GastoDetalleInput, GastoEncabezadoInput, PresupuestoConTipo,
    PresupuestoInput, TipoGastoInput,
};

pub mod credentials;
mod error;
mod money;
mod ops;

pub mod depositos;
pub mod fondos;
pub mod gastos_detalle;
pub mod gastos_encabezado;
pub mod presupuestos;
pub mod tipos_fondo;
pub mod tipos_gasto;
pub mod usuarios;

type ResultEngine<T> = Result<T, EngineError>;
