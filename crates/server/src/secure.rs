//! Authenticated smoke-test endpoint

use api_types::secure::SecureData;
use axum::{Extension, Json};

use crate::auth::Claims;

/// Answers only behind a valid token; clients use it to probe their session.
pub async fn get(Extension(claims): Extension<Claims>) -> Json<SecureData> {
    tracing::debug!("acceso seguro de {}", claims.nombre);
    Json(SecureData {
        mensaje: "Acceso autorizado a datos protegidos".to_string(),
    })
}
