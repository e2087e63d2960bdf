//! Expense detail API endpoints

use api_types::gasto::{DatoDetalle, GastoDetalle};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use engine::{GastoDetalleInput, Monto, gastos_detalle};

use crate::{ServerError, server::ServerState};

fn a_detalle(modelo: gastos_detalle::Model) -> GastoDetalle {
    GastoDetalle {
        id: modelo.id,
        gasto_encabezado_id: modelo.gasto_encabezado_id,
        tipo_gasto_id: modelo.tipo_gasto_id,
        monto: Monto::from_centavos(modelo.monto_centavos).to_decimal(),
    }
}

fn a_input(payload: GastoDetalle) -> GastoDetalleInput {
    GastoDetalleInput {
        gasto_encabezado_id: payload.gasto_encabezado_id,
        tipo_gasto_id: payload.tipo_gasto_id,
        monto: payload.monto,
    }
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<GastoDetalle>>, ServerError> {
    let detalles = state.engine.gastos_detalle().await?;
    Ok(Json(detalles.into_iter().map(a_detalle).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<GastoDetalle>, ServerError> {
    let detalle = state.engine.gasto_detalle(id).await?;
    Ok(Json(a_detalle(detalle)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GastoDetalle>,
) -> Result<(StatusCode, Json<GastoDetalle>), ServerError> {
    let creado = state.engine.new_gasto_detalle(a_input(payload)).await?;
    Ok((StatusCode::CREATED, Json(a_detalle(creado))))
}

/// Insert a batch of detail lines. All of them land or none does.
pub async fn create_masivo(
    State(state): State<ServerState>,
    Json(payload): Json<Vec<GastoDetalle>>,
) -> Result<(StatusCode, Json<Vec<GastoDetalle>>), ServerError> {
    let inputs = payload.into_iter().map(a_input).collect();
    let creados = state.engine.new_gastos_detalle_masivo(inputs).await?;
    Ok((
        StatusCode::CREATED,
        Json(creados.into_iter().map(a_detalle).collect()),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<GastoDetalle>,
) -> Result<StatusCode, ServerError> {
    if payload.id != id {
        return Err(ServerError::Generic(
            "ID en URL no coincide con ID en objeto".to_string(),
        ));
    }

    state.engine.update_gasto_detalle(id, a_input(payload)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_gasto_detalle(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The itemized expense report, newest header first. `numero` counts the
/// rows from 1 in listing order.
pub async fn datos(
    State(state): State<ServerState>,
) -> Result<Json<Vec<DatoDetalle>>, ServerError> {
    let filas = state.engine.datos_detalle().await?;
    Ok(Json(
        filas
            .into_iter()
            .enumerate()
            .map(|(indice, fila)| DatoDetalle {
                numero: indice + 1,
                fecha: fila.fecha.format("%Y-%m-%d").to_string(),
                fondo: fila.fondo,
                tipo_gasto: fila.tipo_gasto,
                monto: Monto::from_centavos(fila.monto_centavos).to_string(),
            })
            .collect(),
    ))
}
