use sea_orm::{
    ActiveValue, ConnectionTrait, DbErr, Statement, TransactionTrait, Value, prelude::*,
};

use crate::{EngineError, ResultEngine, tipos_gasto};

use super::{
    Engine, map_dependent_rows, map_write_err, optional_text_max, require_text_max, with_tx,
};

/// Payload for creating or replacing an expense type. The code is always
/// engine-assigned and never part of the payload.
#[derive(Clone, Debug)]
pub struct TipoGastoInput {
    pub nombre: String,
    pub descripcion: Option<String>,
}

const MENSAJE_NOMBRE: &str = "El nombre del tipo de gasto ya existe";
const MENSAJE_DEPENDIENTES: &str =
    "No se puede eliminar porque tiene registros asociados en otras tablas es llave foranea";

/// Computes and claims the next code inside the INSERT itself. Concurrent
/// creators serialize on the store's write lock, so no two statements can
/// read the same maximum. An empty table or an unparseable numeric part
/// restarts the sequence at TG001.
const INSERT_CON_CODIGO: &str =
    "INSERT INTO tipos_gasto (codigo, nombre, descripcion) \
     VALUES ((SELECT 'TG' || printf('%03d', \
     COALESCE(MAX(CAST(substr(codigo, 3) AS INTEGER)), 0) + 1) FROM tipos_gasto), ?, ?)";

impl Engine {
    /// List every expense type.
    pub async fn tipos_gasto(&self) -> ResultEngine<Vec<tipos_gasto::Model>> {
        Ok(tipos_gasto::Entity::find().all(&self.database).await?)
    }

    /// Return one expense type.
    pub async fn tipo_gasto(&self, id: i32) -> ResultEngine<tipos_gasto::Model> {
        tipos_gasto::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| {
                EngineError::NotFound(format!("No se encontró el tipo de gasto con ID {id}"))
            })
    }

    /// Create an expense type with the next sequential code.
    pub async fn new_tipo_gasto(&self, input: TipoGastoInput) -> ResultEngine<tipos_gasto::Model> {
        let nombre = require_text_max(&input.nombre, "El nombre", 100)?;
        let descripcion = optional_text_max(input.descripcion.as_deref(), "La descripción", 255)?;

        with_tx!(self, |db_tx| {
            let resultado = db_tx
                .execute(Statement::from_sql_and_values(
                    db_tx.get_database_backend(),
                    INSERT_CON_CODIGO,
                    [Value::from(nombre), Value::from(descripcion)],
                ))
                .await
                .map_err(|err| map_write_err(err, MENSAJE_NOMBRE, MENSAJE_NOMBRE))?;

            let id = i32::try_from(resultado.last_insert_id())
                .map_err(|_| DbErr::Custom("tipos_gasto id out of range".to_string()))?;
            let modelo = tipos_gasto::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| {
                    EngineError::NotFound(format!("No se encontró el tipo de gasto con ID {id}"))
                })?;
            Ok(modelo)
        })
    }

    /// Replace name and description. The assigned code never changes.
    pub async fn update_tipo_gasto(&self, id: i32, input: TipoGastoInput) -> ResultEngine<()> {
        let nombre = require_text_max(&input.nombre, "El nombre", 100)?;
        let descripcion = optional_text_max(input.descripcion.as_deref(), "La descripción", 255)?;

        with_tx!(self, |db_tx| {
            if tipos_gasto::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .is_none()
            {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el tipo de gasto con ID {id}"
                )));
            }

            tipos_gasto::ActiveModel {
                id: ActiveValue::Set(id),
                nombre: ActiveValue::Set(nombre),
                descripcion: ActiveValue::Set(descripcion),
                ..Default::default()
            }
            .update(&db_tx)
            .await
            .map_err(|err| map_write_err(err, MENSAJE_NOMBRE, MENSAJE_NOMBRE))?;
            Ok(())
        })
    }

    /// Delete an expense type. Dependent detail lines or budgets block it.
    pub async fn delete_tipo_gasto(&self, id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            if tipos_gasto::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .is_none()
            {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el tipo de gasto con ID {id}"
                )));
            }

            tipos_gasto::Entity::delete_by_id(id)
                .exec(&db_tx)
                .await
                .map_err(|err| map_dependent_rows(err, MENSAJE_DEPENDIENTES))?;
            Ok(())
        })
    }
}
