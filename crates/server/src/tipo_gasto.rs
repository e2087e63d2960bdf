//! Expense type API endpoints

use api_types::tipo_gasto::{TipoGasto, TipoGastoUpsert};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use engine::{TipoGastoInput, tipos_gasto};

use crate::{ServerError, server::ServerState};

fn a_tipo(modelo: tipos_gasto::Model) -> TipoGasto {
    TipoGasto {
        id: modelo.id,
        codigo: modelo.codigo,
        nombre: modelo.nombre,
        descripcion: modelo.descripcion,
    }
}

fn a_input(payload: TipoGastoUpsert) -> TipoGastoInput {
    TipoGastoInput {
        nombre: payload.nombre,
        descripcion: payload.descripcion,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<TipoGasto>>, ServerError> {
    let tipos = state.engine.tipos_gasto().await?;
    Ok(Json(tipos.into_iter().map(a_tipo).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<TipoGasto>, ServerError> {
    let tipo = state.engine.tipo_gasto(id).await?;
    Ok(Json(a_tipo(tipo)))
}

/// Create an expense type. The body never carries a code; the engine assigns
/// the next one in sequence and the response shows it.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TipoGastoUpsert>,
) -> Result<(StatusCode, Json<TipoGasto>), ServerError> {
    let creado = state.engine.new_tipo_gasto(a_input(payload)).await?;
    Ok((StatusCode::CREATED, Json(a_tipo(creado))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<TipoGastoUpsert>,
) -> Result<StatusCode, ServerError> {
    state.engine.update_tipo_gasto(id, a_input(payload)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_tipo_gasto(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
