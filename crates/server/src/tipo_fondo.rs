//! Fund type API endpoints

use api_types::tipo_fondo::TipoFondo;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use engine::tipos_fondo;

use crate::{ServerError, server::ServerState};

fn a_tipo(modelo: tipos_fondo::Model) -> TipoFondo {
    TipoFondo {
        id: modelo.id,
        nombre: modelo.nombre,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<TipoFondo>>, ServerError> {
    let tipos = state.engine.tipos_fondo().await?;
    Ok(Json(tipos.into_iter().map(a_tipo).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<TipoFondo>, ServerError> {
    let tipo = state.engine.tipo_fondo(id).await?;
    Ok(Json(a_tipo(tipo)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TipoFondo>,
) -> Result<(StatusCode, Json<TipoFondo>), ServerError> {
    let creado = state.engine.new_tipo_fondo(&payload.nombre).await?;
    Ok((StatusCode::CREATED, Json(a_tipo(creado))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<TipoFondo>,
) -> Result<StatusCode, ServerError> {
    if payload.id != id {
        return Err(ServerError::Generic(
            "ID en URL no coincide con ID en objeto".to_string(),
        ));
    }

    state.engine.update_tipo_fondo(id, &payload.nombre).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_tipo_fondo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
