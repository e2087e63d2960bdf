//! Fund API endpoints

use api_types::fondo::Fondo;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use engine::{FondoConTipo, FondoInput, Monto};

use crate::{ServerError, server::ServerState};

fn a_fondo(leido: FondoConTipo) -> Fondo {
    Fondo {
        id: leido.fondo.id,
        nro_cuenta: leido.fondo.nro_cuenta,
        nombre_fondo: leido.fondo.nombre_fondo,
        tipo_fondo_id: leido.fondo.tipo_fondo_id,
        saldo: Monto::from_centavos(leido.fondo.saldo_centavos).to_decimal(),
        descripcion: leido.fondo.descripcion,
        activo: leido.fondo.activo,
        tipo_fondo_nombre: Some(leido.tipo_fondo_nombre),
    }
}

fn a_input(payload: Fondo) -> FondoInput {
    FondoInput {
        nro_cuenta: payload.nro_cuenta,
        nombre_fondo: payload.nombre_fondo,
        tipo_fondo_id: payload.tipo_fondo_id,
        saldo: payload.saldo,
        descripcion: payload.descripcion,
        activo: payload.activo,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Fondo>>, ServerError> {
    let fondos = state.engine.fondos().await?;
    Ok(Json(fondos.into_iter().map(a_fondo).collect()))
}

pub async fn list_activos(
    State(state): State<ServerState>,
) -> Result<Json<Vec<Fondo>>, ServerError> {
    let fondos = state.engine.fondos_activos().await?;
    Ok(Json(fondos.into_iter().map(a_fondo).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Fondo>, ServerError> {
    let fondo = state.engine.fondo(id).await?;
    Ok(Json(a_fondo(fondo)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Fondo>,
) -> Result<(StatusCode, Json<Fondo>), ServerError> {
    let creado = state.engine.new_fondo(a_input(payload)).await?;
    Ok((StatusCode::CREATED, Json(a_fondo(creado))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<Fondo>,
) -> Result<StatusCode, ServerError> {
    if payload.id != id {
        return Err(ServerError::Generic(
            "ID en URL no coincide con ID en objeto".to_string(),
        ));
    }

    state.engine.update_fondo(id, a_input(payload)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Funds are never removed; delete clears the active flag.
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.deactivate_fondo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
