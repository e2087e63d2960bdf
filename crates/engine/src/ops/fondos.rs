use rust_decimal::Decimal;
use sea_orm::{ActiveValue, QueryFilter, TransactionTrait, prelude::*};

use crate::{EngineError, Monto, ResultEngine, fondos, tipos_fondo};

use super::{Engine, map_write_err, optional_text, require_text, with_tx};

/// Payload for creating or replacing a fund.
#[derive(Clone, Debug)]
pub struct FondoInput {
    pub nro_cuenta: String,
    pub nombre_fondo: String,
    pub tipo_fondo_id: i32,
    pub saldo: Decimal,
    pub descripcion: Option<String>,
    pub activo: bool,
}

/// A fund row with its fund-type name join-expanded.
#[derive(Clone, Debug, PartialEq)]
pub struct FondoConTipo {
    pub fondo: fondos::Model,
    pub tipo_fondo_nombre: String,
}

const MENSAJE_NRO_CUENTA: &str = "El número de cuenta ya existe";
const MENSAJE_TIPO_FONDO: &str = "El tipo de fondo especificado no existe";

fn con_tipo(par: (fondos::Model, Option<tipos_fondo::Model>)) -> FondoConTipo {
    let (fondo, tipo) = par;
    FondoConTipo {
        fondo,
        tipo_fondo_nombre: tipo.map(|t| t.nombre).unwrap_or_default(),
    }
}

impl Engine {
    /// List every fund, active or not, with its fund-type name.
    pub async fn fondos(&self) -> ResultEngine<Vec<FondoConTipo>> {
        let filas = fondos::Entity::find()
            .find_also_related(tipos_fondo::Entity)
            .all(&self.database)
            .await?;
        Ok(filas.into_iter().map(con_tipo).collect())
    }

    /// List funds whose active flag is still set.
    pub async fn fondos_activos(&self) -> ResultEngine<Vec<FondoConTipo>> {
        let filas = fondos::Entity::find()
            .filter(fondos::Column::Activo.eq(true))
            .find_also_related(tipos_fondo::Entity)
            .all(&self.database)
            .await?;
        Ok(filas.into_iter().map(con_tipo).collect())
    }

    /// Return one fund.
    pub async fn fondo(&self, id: i32) -> ResultEngine<FondoConTipo> {
        fondos::Entity::find_by_id(id)
            .find_also_related(tipos_fondo::Entity)
            .one(&self.database)
            .await?
            .map(con_tipo)
            .ok_or_else(|| EngineError::NotFound(format!("No se encontró el fondo con ID {id}")))
    }

    /// Create a fund and return it with its fund-type name.
    pub async fn new_fondo(&self, input: FondoInput) -> ResultEngine<FondoConTipo> {
        let nro_cuenta = require_text(&input.nro_cuenta, "El número de cuenta")?;
        let nombre_fondo = require_text(&input.nombre_fondo, "El nombre del fondo")?;
        let saldo = Monto::try_from(input.saldo)?;

        with_tx!(self, |db_tx| {
            let creado = fondos::ActiveModel {
                id: ActiveValue::NotSet,
                nro_cuenta: ActiveValue::Set(nro_cuenta),
                nombre_fondo: ActiveValue::Set(nombre_fondo),
                tipo_fondo_id: ActiveValue::Set(input.tipo_fondo_id),
                saldo_centavos: ActiveValue::Set(saldo.centavos()),
                descripcion: ActiveValue::Set(optional_text(input.descripcion.as_deref())),
                activo: ActiveValue::Set(input.activo),
            }
            .insert(&db_tx)
            .await
            .map_err(|err| map_write_err(err, MENSAJE_NRO_CUENTA, MENSAJE_TIPO_FONDO))?;

            let tipo = tipos_fondo::Entity::find_by_id(creado.tipo_fondo_id)
                .one(&db_tx)
                .await?;
            Ok(FondoConTipo {
                fondo: creado,
                tipo_fondo_nombre: tipo.map(|t| t.nombre).unwrap_or_default(),
            })
        })
    }

    /// Replace every field of a fund.
    pub async fn update_fondo(&self, id: i32, input: FondoInput) -> ResultEngine<()> {
        let nro_cuenta = require_text(&input.nro_cuenta, "El número de cuenta")?;
        let nombre_fondo = require_text(&input.nombre_fondo, "El nombre del fondo")?;
        let saldo = Monto::try_from(input.saldo)?;

        with_tx!(self, |db_tx| {
            if fondos::Entity::find_by_id(id).one(&db_tx).await?.is_none() {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el fondo con ID {id}"
                )));
            }

            fondos::ActiveModel {
                id: ActiveValue::Set(id),
                nro_cuenta: ActiveValue::Set(nro_cuenta),
                nombre_fondo: ActiveValue::Set(nombre_fondo),
                tipo_fondo_id: ActiveValue::Set(input.tipo_fondo_id),
                saldo_centavos: ActiveValue::Set(saldo.centavos()),
                descripcion: ActiveValue::Set(optional_text(input.descripcion.as_deref())),
                activo: ActiveValue::Set(input.activo),
            }
            .update(&db_tx)
            .await
            .map_err(|err| map_write_err(err, MENSAJE_NRO_CUENTA, MENSAJE_TIPO_FONDO))?;
            Ok(())
        })
    }

    /// Clear the active flag. The row and its history stay in place.
    pub async fn deactivate_fondo(&self, id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            if fondos::Entity::find_by_id(id).one(&db_tx).await?.is_none() {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el fondo con ID {id}"
                )));
            }

            fondos::ActiveModel {
                id: ActiveValue::Set(id),
                activo: ActiveValue::Set(false),
                ..Default::default()
            }
            .update(&db_tx)
            .await?;
            Ok(())
        })
    }
}
