use rust_decimal::Decimal;
use sea_orm::{
    ActiveValue, FromQueryResult, JoinType, QueryOrder, QuerySelect, TransactionTrait, prelude::*,
};

use crate::{
    EngineError, Monto, ResultEngine, fondos, gastos_detalle, gastos_encabezado, tipos_gasto,
};

use super::{Engine, map_dependent_rows, map_write_err, optional_text, require_text, with_tx};

/// Payload for creating or replacing an expense header.
#[derive(Clone, Debug)]
pub struct GastoEncabezadoInput {
    pub fecha: DateTimeUtc,
    pub fondo_id: i32,
    pub observaciones: Option<String>,
    pub nombre_comercio: String,
    pub tipo_documento: String,
    pub total: Decimal,
}

/// Payload for creating or replacing an expense detail line.
#[derive(Clone, Debug)]
pub struct GastoDetalleInput {
    pub gasto_encabezado_id: i32,
    pub tipo_gasto_id: i32,
    pub monto: Decimal,
}

/// An expense header with its fund name join-expanded.
#[derive(Clone, Debug, PartialEq)]
pub struct GastoConFondo {
    pub gasto: gastos_encabezado::Model,
    pub nombre_fondo: String,
}

/// One row of the itemized expense view: every detail line joined to its
/// header date, fund name and expense-type name.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct FilaDatosDetalle {
    pub fecha: DateTimeUtc,
    pub fondo: String,
    pub tipo_gasto: String,
    pub monto_centavos: i64,
}

const MENSAJE_FONDO: &str = "El fondo_id especificado no existe";
const MENSAJE_REFERENCIAS: &str = "El ID de encabezado o tipo de gasto especificado no existe";
const MENSAJE_REFERENCIAS_MASIVO: &str = "Uno de los IDs de encabezado o tipo de gasto no existe";
const MENSAJE_DEPENDIENTES: &str = "No se puede eliminar porque existen registros dependientes";

fn con_fondo(par: (gastos_encabezado::Model, Option<fondos::Model>)) -> GastoConFondo {
    let (gasto, fondo) = par;
    GastoConFondo {
        gasto,
        nombre_fondo: fondo.map(|f| f.nombre_fondo).unwrap_or_default(),
    }
}

impl Engine {
    /// List every expense header with its fund name.
    pub async fn gastos_encabezado(&self) -> ResultEngine<Vec<GastoConFondo>> {
        let filas = gastos_encabezado::Entity::find()
            .find_also_related(fondos::Entity)
            .all(&self.database)
            .await?;
        Ok(filas.into_iter().map(con_fondo).collect())
    }

    /// Return one expense header.
    pub async fn gasto_encabezado(&self, id: i32) -> ResultEngine<GastoConFondo> {
        gastos_encabezado::Entity::find_by_id(id)
            .find_also_related(fondos::Entity)
            .one(&self.database)
            .await?
            .map(con_fondo)
            .ok_or_else(|| EngineError::NotFound(format!("No se encontró el gasto con ID {id}")))
    }

    /// Create an expense header.
    pub async fn new_gasto_encabezado(
        &self,
        input: GastoEncabezadoInput,
    ) -> ResultEngine<gastos_encabezado::Model> {
        let nombre_comercio = require_text(&input.nombre_comercio, "El nombre del comercio")?;
        let tipo_documento = require_text(&input.tipo_documento, "El tipo de documento")?;
        let total = Monto::try_from(input.total)?;

        gastos_encabezado::ActiveModel {
            id: ActiveValue::NotSet,
            fecha: ActiveValue::Set(input.fecha),
            fondo_id: ActiveValue::Set(input.fondo_id),
            observaciones: ActiveValue::Set(optional_text(input.observaciones.as_deref())),
            nombre_comercio: ActiveValue::Set(nombre_comercio),
            tipo_documento: ActiveValue::Set(tipo_documento),
            total_centavos: ActiveValue::Set(total.centavos()),
        }
        .insert(&self.database)
        .await
        .map_err(|err| map_write_err(err, MENSAJE_FONDO, MENSAJE_FONDO))
    }

    /// Replace every field of an expense header.
    pub async fn update_gasto_encabezado(
        &self,
        id: i32,
        input: GastoEncabezadoInput,
    ) -> ResultEngine<()> {
        let nombre_comercio = require_text(&input.nombre_comercio, "El nombre del comercio")?;
        let tipo_documento = require_text(&input.tipo_documento, "El tipo de documento")?;
        let total = Monto::try_from(input.total)?;

        with_tx!(self, |db_tx| {
            if gastos_encabezado::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .is_none()
            {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el gasto con ID {id}"
                )));
            }

            gastos_encabezado::ActiveModel {
                id: ActiveValue::Set(id),
                fecha: ActiveValue::Set(input.fecha),
                fondo_id: ActiveValue::Set(input.fondo_id),
                observaciones: ActiveValue::Set(optional_text(input.observaciones.as_deref())),
                nombre_comercio: ActiveValue::Set(nombre_comercio),
                tipo_documento: ActiveValue::Set(tipo_documento),
                total_centavos: ActiveValue::Set(total.centavos()),
            }
            .update(&db_tx)
            .await
            .map_err(|err| map_write_err(err, MENSAJE_FONDO, MENSAJE_FONDO))?;
            Ok(())
        })
    }

    /// Delete an expense header. Detail lines still pointing at it block the
    /// delete; they must be removed first.
    pub async fn delete_gasto_encabezado(&self, id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            if gastos_encabezado::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .is_none()
            {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el gasto con ID {id}"
                )));
            }

            gastos_encabezado::Entity::delete_by_id(id)
                .exec(&db_tx)
                .await
                .map_err(|err| map_dependent_rows(err, MENSAJE_DEPENDIENTES))?;
            Ok(())
        })
    }

    /// List every expense detail line.
    pub async fn gastos_detalle(&self) -> ResultEngine<Vec<gastos_detalle::Model>> {
        Ok(gastos_detalle::Entity::find().all(&self.database).await?)
    }

    /// Return one expense detail line.
    pub async fn gasto_detalle(&self, id: i32) -> ResultEngine<gastos_detalle::Model> {
        gastos_detalle::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("No se encontró el detalle con ID {id}")))
    }

    /// Create one expense detail line.
    pub async fn new_gasto_detalle(
        &self,
        input: GastoDetalleInput,
    ) -> ResultEngine<gastos_detalle::Model> {
        let monto = Monto::try_from(input.monto)?;

        gastos_detalle::ActiveModel {
            id: ActiveValue::NotSet,
            gasto_encabezado_id: ActiveValue::Set(input.gasto_encabezado_id),
            tipo_gasto_id: ActiveValue::Set(input.tipo_gasto_id),
            monto_centavos: ActiveValue::Set(monto.centavos()),
        }
        .insert(&self.database)
        .await
        .map_err(|err| map_write_err(err, MENSAJE_REFERENCIAS, MENSAJE_REFERENCIAS))
    }

    /// Create a batch of detail lines in one transaction.
    ///
    /// Either every line is inserted or none is; a bad reference anywhere in
    /// the batch rolls the whole batch back.
    pub async fn new_gastos_detalle_masivo(
        &self,
        inputs: Vec<GastoDetalleInput>,
    ) -> ResultEngine<Vec<gastos_detalle::Model>> {
        if inputs.is_empty() {
            return Err(EngineError::Validation(
                "La lista de detalles no puede estar vacía".to_string(),
            ));
        }
        let mut montos = Vec::with_capacity(inputs.len());
        for input in &inputs {
            montos.push(Monto::try_from(input.monto)?);
        }

        with_tx!(self, |db_tx| {
            let mut creados = Vec::with_capacity(inputs.len());
            for (input, monto) in inputs.iter().zip(montos) {
                let creado = gastos_detalle::ActiveModel {
                    id: ActiveValue::NotSet,
                    gasto_encabezado_id: ActiveValue::Set(input.gasto_encabezado_id),
                    tipo_gasto_id: ActiveValue::Set(input.tipo_gasto_id),
                    monto_centavos: ActiveValue::Set(monto.centavos()),
                }
                .insert(&db_tx)
                .await
                .map_err(|err| {
                    map_write_err(err, MENSAJE_REFERENCIAS_MASIVO, MENSAJE_REFERENCIAS_MASIVO)
                })?;
                creados.push(creado);
            }
            Ok(creados)
        })
    }

    /// Replace every field of a detail line.
    pub async fn update_gasto_detalle(
        &self,
        id: i32,
        input: GastoDetalleInput,
    ) -> ResultEngine<()> {
        let monto = Monto::try_from(input.monto)?;

        with_tx!(self, |db_tx| {
            if gastos_detalle::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .is_none()
            {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el detalle con ID {id}"
                )));
            }

            gastos_detalle::ActiveModel {
                id: ActiveValue::Set(id),
                gasto_encabezado_id: ActiveValue::Set(input.gasto_encabezado_id),
                tipo_gasto_id: ActiveValue::Set(input.tipo_gasto_id),
                monto_centavos: ActiveValue::Set(monto.centavos()),
            }
            .update(&db_tx)
            .await
            .map_err(|err| map_write_err(err, MENSAJE_REFERENCIAS, MENSAJE_REFERENCIAS))?;
            Ok(())
        })
    }

    /// Delete one detail line.
    pub async fn delete_gasto_detalle(&self, id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            if gastos_detalle::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .is_none()
            {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el detalle con ID {id}"
                )));
            }

            gastos_detalle::Entity::delete_by_id(id).exec(&db_tx).await?;
            Ok(())
        })
    }

    /// The itemized expense view: detail lines joined to header date, fund
    /// name and expense-type name, newest header first.
    pub async fn datos_detalle(&self) -> ResultEngine<Vec<FilaDatosDetalle>> {
        Ok(gastos_detalle::Entity::find()
            .select_only()
            .column_as(gastos_encabezado::Column::Fecha, "fecha")
            .column_as(fondos::Column::NombreFondo, "fondo")
            .column_as(tipos_gasto::Column::Nombre, "tipo_gasto")
            .column_as(gastos_detalle::Column::MontoCentavos, "monto_centavos")
            .join(
                JoinType::InnerJoin,
                gastos_detalle::Relation::GastosEncabezado.def(),
            )
            .join(
                JoinType::InnerJoin,
                gastos_encabezado::Relation::Fondos.def(),
            )
            .join(
                JoinType::InnerJoin,
                gastos_detalle::Relation::TiposGasto.def(),
            )
            .order_by_desc(gastos_encabezado::Column::Fecha)
            .order_by_asc(gastos_detalle::Column::Id)
            .into_model::<FilaDatosDetalle>()
            .all(&self.database)
            .await?)
    }
}
