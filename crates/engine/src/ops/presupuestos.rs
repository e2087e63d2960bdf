use rust_decimal::Decimal;
use sea_orm::{
    ActiveValue, DatabaseTransaction, DbErr, QueryFilter, TransactionTrait, prelude::*,
};

use crate::{EngineError, Monto, ResultEngine, presupuestos, tipos_gasto};

use super::{Engine, map_write_err, monto_minimo, with_tx};

/// Payload for creating or replacing a budget.
#[derive(Clone, Debug)]
pub struct PresupuestoInput {
    pub tipo_gasto_id: i32,
    pub mes: u8,
    pub anio: i32,
    pub monto: Decimal,
}

/// A budget row with its expense-type name join-expanded.
#[derive(Clone, Debug, PartialEq)]
pub struct PresupuestoConTipo {
    pub presupuesto: presupuestos::Model,
    pub tipo_gasto_nombre: String,
}

const MENSAJE_DUPLICADO: &str =
    "Ya existe un presupuesto para este tipo de gasto en el mismo mes y año";
const MENSAJE_DUPLICADO_OTRO: &str =
    "Ya existe otro presupuesto para este tipo de gasto en el mismo mes y año";
const MENSAJE_TIPO_GASTO: &str = "El tipo de gasto especificado no existe";

fn validar(input: &PresupuestoInput) -> ResultEngine<Monto> {
    if !(1..=12).contains(&input.mes) {
        return Err(EngineError::Validation(
            "El mes debe estar entre 1 y 12".to_string(),
        ));
    }
    if !(2000..=2100).contains(&input.anio) {
        return Err(EngineError::Validation(
            "El año debe estar entre 2000 y 2100".to_string(),
        ));
    }
    monto_minimo(input.monto, "El monto")
}

fn con_tipo(par: (presupuestos::Model, Option<tipos_gasto::Model>)) -> PresupuestoConTipo {
    let (presupuesto, tipo) = par;
    PresupuestoConTipo {
        presupuesto,
        tipo_gasto_nombre: tipo.map(|t| t.nombre).unwrap_or_default(),
    }
}

/// True when another budget already covers the same type, month and year.
/// `excluir` skips the row being replaced on updates.
async fn hay_duplicado(
    db_tx: &DatabaseTransaction,
    input: &PresupuestoInput,
    excluir: Option<i32>,
) -> Result<bool, DbErr> {
    let mut consulta = presupuestos::Entity::find()
        .filter(presupuestos::Column::TipoGastoId.eq(input.tipo_gasto_id))
        .filter(presupuestos::Column::Mes.eq(i16::from(input.mes)))
        .filter(presupuestos::Column::Anio.eq(input.anio));
    if let Some(id) = excluir {
        consulta = consulta.filter(presupuestos::Column::Id.ne(id));
    }
    Ok(consulta.one(db_tx).await?.is_some())
}

impl Engine {
    /// List every budget with its expense-type name.
    pub async fn presupuestos(&self) -> ResultEngine<Vec<PresupuestoConTipo>> {
        let filas = presupuestos::Entity::find()
            .find_also_related(tipos_gasto::Entity)
            .all(&self.database)
            .await?;
        Ok(filas.into_iter().map(con_tipo).collect())
    }

    /// Return one budget.
    pub async fn presupuesto(&self, id: i32) -> ResultEngine<PresupuestoConTipo> {
        presupuestos::Entity::find_by_id(id)
            .find_also_related(tipos_gasto::Entity)
            .one(&self.database)
            .await?
            .map(con_tipo)
            .ok_or_else(|| {
                EngineError::NotFound(format!("No se encontró el presupuesto con ID {id}"))
            })
    }

    /// Create a budget. At most one budget may exist per expense type, month
    /// and year; the in-transaction check reports the friendly conflict and
    /// the unique index closes the remaining race.
    pub async fn new_presupuesto(
        &self,
        input: PresupuestoInput,
    ) -> ResultEngine<PresupuestoConTipo> {
        let monto = validar(&input)?;

        with_tx!(self, |db_tx| {
            if hay_duplicado(&db_tx, &input, None).await? {
                return Err(EngineError::Conflict(MENSAJE_DUPLICADO.to_string()));
            }

            let creado = presupuestos::ActiveModel {
                id: ActiveValue::NotSet,
                tipo_gasto_id: ActiveValue::Set(input.tipo_gasto_id),
                mes: ActiveValue::Set(i16::from(input.mes)),
                anio: ActiveValue::Set(input.anio),
                monto_centavos: ActiveValue::Set(monto.centavos()),
            }
            .insert(&db_tx)
            .await
            .map_err(|err| map_write_err(err, MENSAJE_DUPLICADO, MENSAJE_TIPO_GASTO))?;

            let tipo = tipos_gasto::Entity::find_by_id(creado.tipo_gasto_id)
                .one(&db_tx)
                .await?;
            Ok(PresupuestoConTipo {
                presupuesto: creado,
                tipo_gasto_nombre: tipo.map(|t| t.nombre).unwrap_or_default(),
            })
        })
    }

    /// Replace a budget. Keeping its own (type, month, year) is fine; taking
    /// another budget's combination is a conflict.
    pub async fn update_presupuesto(
        &self,
        id: i32,
        input: PresupuestoInput,
    ) -> ResultEngine<PresupuestoConTipo> {
        let monto = validar(&input)?;

        with_tx!(self, |db_tx| {
            if presupuestos::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .is_none()
            {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el presupuesto con ID {id}"
                )));
            }
            if hay_duplicado(&db_tx, &input, Some(id)).await? {
                return Err(EngineError::Conflict(MENSAJE_DUPLICADO_OTRO.to_string()));
            }

            let guardado = presupuestos::ActiveModel {
                id: ActiveValue::Set(id),
                tipo_gasto_id: ActiveValue::Set(input.tipo_gasto_id),
                mes: ActiveValue::Set(i16::from(input.mes)),
                anio: ActiveValue::Set(input.anio),
                monto_centavos: ActiveValue::Set(monto.centavos()),
            }
            .update(&db_tx)
            .await
            .map_err(|err| map_write_err(err, MENSAJE_DUPLICADO_OTRO, MENSAJE_TIPO_GASTO))?;

            let tipo = tipos_gasto::Entity::find_by_id(guardado.tipo_gasto_id)
                .one(&db_tx)
                .await?;
            Ok(PresupuestoConTipo {
                presupuesto: guardado,
                tipo_gasto_nombre: tipo.map(|t| t.nombre).unwrap_or_default(),
            })
        })
    }

    /// Delete a budget.
    pub async fn delete_presupuesto(&self, id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            if presupuestos::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .is_none()
            {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el presupuesto con ID {id}"
                )));
            }

            presupuestos::Entity::delete_by_id(id).exec(&db_tx).await?;
            Ok(())
        })
    }
}
