//! Login endpoint and token plumbing

use axum::{Json, extract::State};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::Error as JwtError,
};
use serde::{Deserialize, Serialize};

use api_types::auth::{LoginRequest, LoginResponse};

use crate::{ServerError, server::ServerState};

/// Everything needed to sign and verify tokens. Built once at startup from
/// the application settings and shared through [`ServerState`].
pub struct AuthConfig {
    issuer: String,
    audience: String,
    expire_minutes: i64,
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl AuthConfig {
    pub fn new(
        issuer: impl Into<String>,
        audience: impl Into<String>,
        secret: &str,
        expire_minutes: i64,
    ) -> Self {
        Self {
            issuer: issuer.into(),
            audience: audience.into(),
            expire_minutes,
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Claims carried by every issued token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub nombre: String,
    pub rol: String,
    pub iss: String,
    pub aud: String,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
}

pub(crate) fn verify_token(auth: &AuthConfig, token: &str) -> Result<Claims, JwtError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&auth.issuer]);
    validation.set_audience(&[&auth.audience]);
    decode::<Claims>(token, &auth.decoding, &validation).map(|data| data.claims)
}

/// Handle login requests. Bad credentials and unknown users get the same
/// 401 answer.
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ServerError> {
    let usuario = state
        .engine
        .verify_usuario(&payload.nombre_usuario, &payload.contrasena)
        .await?
        .ok_or(ServerError::Unauthorized)?;

    let expiracion = Utc::now() + Duration::minutes(state.auth.expire_minutes);
    let claims = Claims {
        sub: usuario.id.to_string(),
        nombre: usuario.nombre.clone(),
        rol: usuario.rol.clone(),
        iss: state.auth.issuer.clone(),
        aud: state.auth.audience.clone(),
        exp: expiracion.timestamp(),
    };
    let token = encode(&Header::default(), &claims, &state.auth.encoding)
        .map_err(|err| ServerError::Internal(format!("failed to sign token: {err}")))?;

    Ok(Json(LoginResponse {
        token,
        expiracion: expiracion.fixed_offset(),
        nombre: usuario.nombre,
        rol: usuario.rol,
    }))
}
