//! Expense header API endpoints

use api_types::gasto::GastoEncabezado;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;

use engine::{GastoConFondo, GastoEncabezadoInput, Monto, gastos_encabezado};

use crate::{ServerError, server::ServerState};

fn a_gasto(modelo: gastos_encabezado::Model, nombre_fondo: Option<String>) -> GastoEncabezado {
    GastoEncabezado {
        id: modelo.id,
        fecha: modelo.fecha.fixed_offset(),
        fondo_id: modelo.fondo_id,
        observaciones: modelo.observaciones,
        nombre_comercio: modelo.nombre_comercio,
        tipo_documento: modelo.tipo_documento,
        total: Monto::from_centavos(modelo.total_centavos).to_decimal(),
        nombre_fondo,
    }
}

fn con_fondo(leido: GastoConFondo) -> GastoEncabezado {
    let nombre = Some(leido.nombre_fondo);
    a_gasto(leido.gasto, nombre)
}

fn a_input(payload: GastoEncabezado) -> GastoEncabezadoInput {
    GastoEncabezadoInput {
        fecha: payload.fecha.with_timezone(&Utc),
        fondo_id: payload.fondo_id,
        observaciones: payload.observaciones,
        nombre_comercio: payload.nombre_comercio,
        tipo_documento: payload.tipo_documento,
        total: payload.total,
    }
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<GastoEncabezado>>, ServerError> {
    let gastos = state.engine.gastos_encabezado().await?;
    Ok(Json(gastos.into_iter().map(con_fondo).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<GastoEncabezado>, ServerError> {
    let gasto = state.engine.gasto_encabezado(id).await?;
    Ok(Json(con_fondo(gasto)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GastoEncabezado>,
) -> Result<(StatusCode, Json<GastoEncabezado>), ServerError> {
    let creado = state.engine.new_gasto_encabezado(a_input(payload)).await?;
    Ok((StatusCode::CREATED, Json(a_gasto(creado, None))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<GastoEncabezado>,
) -> Result<StatusCode, ServerError> {
    if payload.id != id {
        return Err(ServerError::Generic(
            "ID en URL no coincide con ID en objeto".to_string(),
        ));
    }

    state
        .engine
        .update_gasto_encabezado(id, a_input(payload))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_gasto_encabezado(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
