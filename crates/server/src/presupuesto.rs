//! Budget API endpoints

use api_types::presupuesto::{Presupuesto, PresupuestoUpsert};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use engine::{Monto, PresupuestoConTipo, PresupuestoInput};

use crate::{ServerError, server::ServerState};

const NOMBRES_MES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

fn nombre_mes(mes: u8) -> String {
    usize::from(mes)
        .checked_sub(1)
        .and_then(|indice| NOMBRES_MES.get(indice))
        .map_or_else(|| "Mes inválido".to_string(), |nombre| (*nombre).to_string())
}

fn a_presupuesto(leido: PresupuestoConTipo) -> Presupuesto {
    let mes = leido.presupuesto.mes as u8;
    Presupuesto {
        id: leido.presupuesto.id,
        tipo_gasto_id: leido.presupuesto.tipo_gasto_id,
        mes,
        anio: leido.presupuesto.anio,
        monto: Monto::from_centavos(leido.presupuesto.monto_centavos).to_decimal(),
        tipo_gasto_nombre: leido.tipo_gasto_nombre,
        nombre_mes: nombre_mes(mes),
    }
}

fn a_input(payload: PresupuestoUpsert) -> PresupuestoInput {
    PresupuestoInput {
        tipo_gasto_id: payload.tipo_gasto_id,
        mes: payload.mes,
        anio: payload.anio,
        monto: payload.monto,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Presupuesto>>, ServerError> {
    let presupuestos = state.engine.presupuestos().await?;
    Ok(Json(presupuestos.into_iter().map(a_presupuesto).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Presupuesto>, ServerError> {
    let presupuesto = state.engine.presupuesto(id).await?;
    Ok(Json(a_presupuesto(presupuesto)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PresupuestoUpsert>,
) -> Result<(StatusCode, Json<Presupuesto>), ServerError> {
    let creado = state.engine.new_presupuesto(a_input(payload)).await?;
    Ok((StatusCode::CREATED, Json(a_presupuesto(creado))))
}

/// Replace a budget. Answers 200 with the stored row.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<PresupuestoUpsert>,
) -> Result<Json<Presupuesto>, ServerError> {
    let guardado = state.engine.update_presupuesto(id, a_input(payload)).await?;
    Ok(Json(a_presupuesto(guardado)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_presupuesto(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
