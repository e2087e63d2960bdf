use sea_orm::{QueryFilter, prelude::*};

use crate::{ResultEngine, credentials, usuarios};

use super::Engine;

impl Engine {
    /// Look up an active user and verify the supplied password.
    ///
    /// Returns `Ok(None)` for unknown users, deactivated users and wrong
    /// passwords alike, so callers cannot tell the cases apart.
    pub async fn verify_usuario(
        &self,
        nombre_usuario: &str,
        contrasena: &str,
    ) -> ResultEngine<Option<usuarios::Model>> {
        let usuario = usuarios::Entity::find()
            .filter(usuarios::Column::NombreUsuario.eq(nombre_usuario))
            .filter(usuarios::Column::Activo.eq(true))
            .one(&self.database)
            .await?;

        Ok(usuario.filter(|u| credentials::verify(contrasena, &u.contrasena)))
    }
}
