use sea_orm::{ActiveValue, QueryFilter, TransactionTrait, prelude::*};

use crate::{EngineError, ResultEngine, fondos, tipos_fondo};

use super::{Engine, map_dependent_rows, map_write_err, require_text, with_tx};

const MENSAJE_NOMBRE: &str = "El nombre del tipo de fondo ya existe";
const MENSAJE_EN_USO: &str = "No se puede eliminar el tipo porque tiene fondos asociados";

impl Engine {
    /// List every fund type.
    pub async fn tipos_fondo(&self) -> ResultEngine<Vec<tipos_fondo::Model>> {
        Ok(tipos_fondo::Entity::find().all(&self.database).await?)
    }

    /// Return one fund type.
    pub async fn tipo_fondo(&self, id: i32) -> ResultEngine<tipos_fondo::Model> {
        tipos_fondo::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| {
                EngineError::NotFound(format!("No se encontró el tipo de fondo con ID {id}"))
            })
    }

    /// Create a fund type.
    pub async fn new_tipo_fondo(&self, nombre: &str) -> ResultEngine<tipos_fondo::Model> {
        let nombre = require_text(nombre, "El nombre")?;
        tipos_fondo::ActiveModel {
            id: ActiveValue::NotSet,
            nombre: ActiveValue::Set(nombre),
        }
        .insert(&self.database)
        .await
        .map_err(|err| map_write_err(err, MENSAJE_NOMBRE, MENSAJE_NOMBRE))
    }

    /// Rename a fund type.
    pub async fn update_tipo_fondo(&self, id: i32, nombre: &str) -> ResultEngine<()> {
        let nombre = require_text(nombre, "El nombre")?;
        with_tx!(self, |db_tx| {
            if tipos_fondo::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .is_none()
            {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el tipo de fondo con ID {id}"
                )));
            }

            tipos_fondo::ActiveModel {
                id: ActiveValue::Set(id),
                nombre: ActiveValue::Set(nombre),
            }
            .update(&db_tx)
            .await
            .map_err(|err| map_write_err(err, MENSAJE_NOMBRE, MENSAJE_NOMBRE))?;
            Ok(())
        })
    }

    /// Delete a fund type unless a fund still references it.
    ///
    /// The reference check and the delete run in one transaction, so a fund
    /// created in between cannot be orphaned.
    pub async fn delete_tipo_fondo(&self, id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            if tipos_fondo::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .is_none()
            {
                return Err(EngineError::NotFound(format!(
                    "No se encontró el tipo de fondo con ID {id}"
                )));
            }

            let en_uso = fondos::Entity::find()
                .filter(fondos::Column::TipoFondoId.eq(id))
                .one(&db_tx)
                .await?
                .is_some();
            if en_uso {
                return Err(EngineError::Conflict(MENSAJE_EN_USO.to_string()));
            }

            tipos_fondo::Entity::delete_by_id(id)
                .exec(&db_tx)
                .await
                .map_err(|err| map_dependent_rows(err, MENSAJE_EN_USO))?;
            Ok(())
        })
    }
}
