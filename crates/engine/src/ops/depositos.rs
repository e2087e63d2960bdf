use rust_decimal::Decimal;
use sea_orm::{
    ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*, sea_query::Expr,
};

use crate::{EngineError, Monto, ResultEngine, depositos, fondos};

use super::{Engine, map_write_err, monto_minimo, with_tx};

/// Payload for creating or replacing a deposit.
#[derive(Clone, Debug)]
pub struct DepositoInput {
    pub fecha: DateTimeUtc,
    pub fondo_id: i32,
    pub monto: Decimal,
}

/// A deposit row with its fund name join-expanded.
#[derive(Clone, Debug, PartialEq)]
pub struct DepositoConFondo {
    pub deposito: depositos::Model,
    pub nombre_fondo: String,
}

const MENSAJE_FONDO: &str = "El fondo especificado no existe";
const MENSAJE_SALDO: &str =
    "No se pudo actualizar el saldo del fondo. El fondo especificado no existe.";

fn validar(input: &DepositoInput) -> ResultEngine<Monto> {
    if input.fondo_id < 1 {
        return Err(EngineError::Validation("ID de fondo inválido".to_string()));
    }
    monto_minimo(input.monto, "El monto")
}

impl Engine {
    /// List every deposit.
    pub async fn depositos(&self) -> ResultEngine<Vec<depositos::Model>> {
        Ok(depositos::Entity::find().all(&self.database).await?)
    }

    /// List deposits with their fund names, newest first.
    pub async fn depositos_detalle(&self) -> ResultEngine<Vec<DepositoConFondo>> {
        let filas = depositos::Entity::find()
            .find_also_related(fondos::Entity)
            .order_by_desc(depositos::Column::Fecha)
            .all(&self.database)
            .await?;
        Ok(filas
            .into_iter()
            .map(|(deposito, fondo)| DepositoConFondo {
                deposito,
                nombre_fondo: fondo.map(|f| f.nombre_fondo).unwrap_or_default(),
            })
            .collect())
    }

    /// Return one deposit.
    pub async fn deposito(&self, id: i32) -> ResultEngine<depositos::Model> {
        depositos::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| {
                EngineError::NotFound(format!("No se encontró el depósito con ID {id}"))
            })
    }

    /// Create a deposit and add its amount to the fund balance.
    ///
    /// Both writes commit together or not at all; no reader ever sees the
    /// deposit row without the moved balance.
    pub async fn new_deposito(&self, input: DepositoInput) -> ResultEngine<depositos::Model> {
        let monto = validar(&input)?;

        with_tx!(self, |db_tx| {
            let creado = depositos::ActiveModel {
                id: ActiveValue::NotSet,
                fecha: ActiveValue::Set(input.fecha),
                fondo_id: ActiveValue::Set(input.fondo_id),
                monto_centavos: ActiveValue::Set(monto.centavos()),
            }
            .insert(&db_tx)
            .await
            .map_err(|err| map_write_err(err, MENSAJE_FONDO, MENSAJE_FONDO))?;

            let actualizados = fondos::Entity::update_many()
                .col_expr(
                    fondos::Column::SaldoCentavos,
                    Expr::col(fondos::Column::SaldoCentavos).add(monto.centavos()),
                )
                .filter(fondos::Column::Id.eq(input.fondo_id))
                .exec(&db_tx)
                .await?;
            if actualizados.rows_affected == 0 {
                return Err(EngineError::MissingReference(MENSAJE_SALDO.to_string()));
            }

            Ok(creado)
        })
    }

    /// Replace a deposit row.
    ///
    /// The fund balance keeps the contribution recorded at creation time;
    /// updating a deposit does not recompute it.
    pub async fn update_deposito(
        &self,
        id: i32,
        input: DepositoInput,
    ) -> ResultEngine<depositos::Model> {
        let monto = validar(&input)?;

        with_tx!(self, |db_tx| {
            if depositos::Entity::find_by_id(id).one(&db_tx).await?.is_none() {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el depósito con ID {id}"
                )));
            }

            let modelo = depositos::ActiveModel {
                id: ActiveValue::Set(id),
                fecha: ActiveValue::Set(input.fecha),
                fondo_id: ActiveValue::Set(input.fondo_id),
                monto_centavos: ActiveValue::Set(monto.centavos()),
            }
            .update(&db_tx)
            .await
            .map_err(|err| map_write_err(err, MENSAJE_FONDO, MENSAJE_FONDO))?;

            Ok(modelo)
        })
    }

    /// Delete a deposit row. The fund balance keeps the original contribution.
    pub async fn delete_deposito(&self, id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            if depositos::Entity::find_by_id(id).one(&db_tx).await?.is_none() {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el depósito con ID {id}"
                )));
            }

            depositos::Entity::delete_by_id(id).exec(&db_tx).await?;
            Ok(())
        })
    }
}
