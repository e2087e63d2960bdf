//! Deposit API endpoints

use api_types::deposito::{Deposito, DepositoDetalle, DepositoNew};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;

use engine::{DepositoInput, Monto, depositos};

use crate::{ServerError, server::ServerState};

fn a_deposito(modelo: depositos::Model) -> Deposito {
    Deposito {
        id_deposito: modelo.id,
        fecha_deposito: modelo.fecha.fixed_offset(),
        id_fondo: modelo.fondo_id,
        monto: Monto::from_centavos(modelo.monto_centavos).to_decimal(),
    }
}

fn a_input(payload: DepositoNew) -> DepositoInput {
    DepositoInput {
        fecha: payload.fecha_deposito.with_timezone(&Utc),
        fondo_id: payload.id_fondo,
        monto: payload.monto,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Deposito>>, ServerError> {
    let depositos = state.engine.depositos().await?;
    Ok(Json(depositos.into_iter().map(a_deposito).collect()))
}

/// Deposit listing joined with fund names, newest first.
pub async fn list_detalle(
    State(state): State<ServerState>,
) -> Result<Json<Vec<DepositoDetalle>>, ServerError> {
    let filas = state.engine.depositos_detalle().await?;
    Ok(Json(
        filas
            .into_iter()
            .map(|fila| DepositoDetalle {
                id_deposito: fila.deposito.id,
                fecha_deposito: fila.deposito.fecha.fixed_offset(),
                nombre_fondo: fila.nombre_fondo,
                monto: Monto::from_centavos(fila.deposito.monto_centavos).to_decimal(),
            })
            .collect(),
    ))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Deposito>, ServerError> {
    let deposito = state.engine.deposito(id).await?;
    Ok(Json(a_deposito(deposito)))
}

/// Create a deposit; the fund balance moves in the same transaction.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepositoNew>,
) -> Result<(StatusCode, Json<Deposito>), ServerError> {
    let creado = state.engine.new_deposito(a_input(payload)).await?;
    Ok((StatusCode::CREATED, Json(a_deposito(creado))))
}

/// Replace a deposit. Answers 200 with the stored row.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<DepositoNew>,
) -> Result<Json<Deposito>, ServerError> {
    let guardado = state.engine.update_deposito(id, a_input(payload)).await?;
    Ok(Json(a_deposito(guardado)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_deposito(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
