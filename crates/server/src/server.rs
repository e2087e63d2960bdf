use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use std::sync::Arc;

use crate::{
    auth, deposito, fondo, gasto_detalle, gasto_encabezado, presupuesto, secure, tipo_fondo,
    tipo_gasto,
};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub auth: Arc<auth::AuthConfig>,
}

/// Reject requests without a valid bearer token.
///
/// A missing header and a bad token both answer 401; the verified claims are
/// stored in the request extensions for handlers that want them.
async fn require_token(
    State(state): State<ServerState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(TypedHeader(header)) = bearer else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    let claims = auth::verify_token(&state.auth, header.token())
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Routes that work without a token: login, deposits and fund types.
fn public_router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/deposito", get(deposito::list).post(deposito::create))
        .route("/api/deposito/DepositoDetalle", get(deposito::list_detalle))
        .route(
            "/api/deposito/{id}",
            get(deposito::get)
                .put(deposito::update)
                .delete(deposito::remove),
        )
        .route(
            "/api/tipofondo",
            get(tipo_fondo::list).post(tipo_fondo::create),
        )
        .route(
            "/api/tipofondo/{id}",
            get(tipo_fondo::get)
                .put(tipo_fondo::update)
                .delete(tipo_fondo::remove),
        )
}

/// Routes behind the bearer-token check.
fn protected_router(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route("/api/fondo", get(fondo::list).post(fondo::create))
        .route("/api/fondo/activos", get(fondo::list_activos))
        .route(
            "/api/fondo/{id}",
            get(fondo::get).put(fondo::update).delete(fondo::remove),
        )
        .route(
            "/api/gastoencabezado",
            get(gasto_encabezado::list).post(gasto_encabezado::create),
        )
        .route(
            "/api/gastoencabezado/{id}",
            get(gasto_encabezado::get)
                .put(gasto_encabezado::update)
                .delete(gasto_encabezado::remove),
        )
        .route(
            "/api/gastodetalle",
            get(gasto_detalle::list).post(gasto_detalle::create),
        )
        .route("/api/gastodetalle/masivo", post(gasto_detalle::create_masivo))
        .route(
            "/api/gastodetalle/{id}",
            get(gasto_detalle::get)
                .put(gasto_detalle::update)
                .delete(gasto_detalle::remove),
        )
        .route("/api/gastodetalle/datosDetalle", get(gasto_detalle::datos))
        .route(
            "/api/tipogasto",
            get(tipo_gasto::list).post(tipo_gasto::create),
        )
        .route(
            "/api/tipogasto/{id}",
            get(tipo_gasto::get)
                .put(tipo_gasto::update)
                .delete(tipo_gasto::remove),
        )
        .route(
            "/api/presupuesto",
            get(presupuesto::list).post(presupuesto::create),
        )
        .route(
            "/api/presupuesto/{id}",
            get(presupuesto::get)
                .put(presupuesto::update)
                .delete(presupuesto::remove),
        )
        .route("/api/secure/datos-protegidos", get(secure::get))
        .route_layer(middleware::from_fn_with_state(state, require_token))
}

fn router(state: ServerState) -> Router {
    Router::new()
        .merge(public_router())
        .merge(protected_router(state.clone()))
        .with_state(state)
}

/// Build the full application router. Mostly useful to exercise the API
/// without binding a socket.
pub fn app(engine: Engine, auth_config: auth::AuthConfig) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
        auth: Arc::new(auth_config),
    };
    router(state)
}

pub async fn run(engine: Engine, auth_config: auth::AuthConfig, bind: &str) {
    let listener = match tokio::net::TcpListener::bind(bind).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, auth_config, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    auth_config: auth::AuthConfig,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine, auth_config)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    auth_config: auth::AuthConfig,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, auth_config, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
