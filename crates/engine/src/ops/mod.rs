use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{EngineError, Monto, ResultEngine};

mod depositos;
mod fondos;
mod gastos;
mod presupuestos;
mod tipos_fondo;
mod tipos_gasto;
mod usuarios;

pub use depositos::{DepositoConFondo, DepositoInput};
pub use fondos::{FondoConTipo, FondoInput};
pub use gastos::{FilaDatosDetalle, GastoConFondo, GastoDetalleInput, GastoEncabezadoInput};
pub use presupuestos::{PresupuestoConTipo, PresupuestoInput};
pub use tipos_gasto::TipoGastoInput;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

fn require_text(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Validation(format!("{label} es obligatorio")));
    }
    Ok(trimmed.to_string())
}

fn require_text_max(value: &str, label: &str, max: usize) -> ResultEngine<String> {
    let text = require_text(value, label)?;
    if text.chars().count() > max {
        return Err(EngineError::Validation(format!(
            "{label} admite como máximo {max} caracteres"
        )));
    }
    Ok(text)
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn optional_text_max(
    value: Option<&str>,
    label: &str,
    max: usize,
) -> ResultEngine<Option<String>> {
    let text = optional_text(value);
    if let Some(t) = &text
        && t.chars().count() > max
    {
        return Err(EngineError::Validation(format!(
            "{label} admite como máximo {max} caracteres"
        )));
    }
    Ok(text)
}

fn monto_minimo(valor: Decimal, label: &str) -> ResultEngine<Monto> {
    let monto = Monto::try_from(valor)?;
    if monto.centavos() < 1 {
        return Err(EngineError::Validation(format!(
            "{label} debe ser mayor que cero"
        )));
    }
    Ok(monto)
}

/// Classify a write failure: unique violations become [`EngineError::Conflict`]
/// and foreign-key violations [`EngineError::MissingReference`].
fn map_write_err(err: DbErr, unico: &str, referencia: &str) -> EngineError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => EngineError::Conflict(unico.to_string()),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            EngineError::MissingReference(referencia.to_string())
        }
        _ => EngineError::Database(err),
    }
}

/// Classify a delete failure: a foreign-key violation means dependent rows
/// still point at the target, which is a conflict.
fn map_dependent_rows(err: DbErr, mensaje: &str) -> EngineError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            EngineError::Conflict(mensaje.to_string())
        }
        _ => EngineError::Database(err),
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
