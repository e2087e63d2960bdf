use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;

pub use auth::AuthConfig;
pub use server::{app, run, run_with_listener, spawn_with_listener};

mod auth;
mod deposito;
mod fondo;
mod gasto_detalle;
mod gasto_encabezado;
mod presupuesto;
mod secure;
mod server;
mod tipo_fondo;
mod tipo_gasto;

pub mod types {
    pub mod auth {
        pub use api_types::auth::{LoginRequest, LoginResponse};
    }

    pub mod fondo {
        pub use api_types::fondo::Fondo;
    }

    pub mod deposito {
        pub use api_types::deposito::{Deposito, DepositoDetalle, DepositoNew};
    }

    pub mod gasto {
        pub use api_types::gasto::{DatoDetalle, GastoDetalle, GastoEncabezado};
    }

    pub mod tipo_fondo {
        pub use api_types::tipo_fondo::TipoFondo;
    }

    pub mod tipo_gasto {
        pub use api_types::tipo_gasto::{TipoGasto, TipoGastoUpsert};
    }

    pub mod presupuesto {
        pub use api_types::presupuesto::{Presupuesto, PresupuestoUpsert};
    }

    pub mod secure {
        pub use api_types::secure::SecureData;
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
    Unauthorized,
    Internal(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::NotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Conflict(_) => StatusCode::CONFLICT,
        EngineError::MissingReference(_) | EngineError::Validation(_) => StatusCode::BAD_REQUEST,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "Error interno del servidor".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
            ServerError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Credenciales inválidas".to_string(),
            ),
            ServerError::Internal(err) => {
                tracing::error!("internal error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
