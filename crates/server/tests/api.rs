use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use sea_orm::{ConnectionTrait, Database, Statement};
use serde_json::{Value, json};
use tower::ServiceExt;

use engine::{Engine, credentials};
use migration::MigratorTrait;
use server::AuthConfig;

/// Full application over an in-memory store, with one seeded login.
async fn app_with_usuario() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO usuarios (nombre_usuario, contrasena, nombre, rol, activo) \
         VALUES (?, ?, ?, ?, ?)",
        vec![
            "admin".into(),
            credentials::digest("admin123").into(),
            "Administrador".into(),
            "Admin".into(),
            true.into(),
        ],
    ))
    .await
    .unwrap();

    let engine = Engine::builder().database(db).build().await.unwrap();
    server::app(
        engine,
        AuthConfig::new("alcancia", "alcancia-clientes", "clave-de-prueba-suficiente", 60),
    )
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn login(app: &Router) -> String {
    let res = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/auth/login",
            None,
            &json!({"NombreUsuario": "admin", "Contrasena": "admin123"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    body["Token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn login_answers_pascal_case_token_payload() {
    let app = app_with_usuario().await;

    let res = app
        .oneshot(send_json(
            "POST",
            "/api/auth/login",
            None,
            &json!({"NombreUsuario": "admin", "Contrasena": "admin123"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert!(body["Token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body["Expiracion"].as_str().is_some());
    assert_eq!(body["Nombre"], "Administrador");
    assert_eq!(body["Rol"], "Admin");
}

#[tokio::test]
async fn bad_password_and_unknown_user_answer_identically() {
    let app = app_with_usuario().await;

    let wrong = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/auth/login",
            None,
            &json!({"NombreUsuario": "admin", "Contrasena": "mala"}),
        ))
        .await
        .unwrap();
    let unknown = app
        .oneshot(send_json(
            "POST",
            "/api/auth/login",
            None,
            &json!({"NombreUsuario": "fantasma", "Contrasena": "admin123"}),
        ))
        .await
        .unwrap();

    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let cuerpo_wrong = body_json(wrong).await;
    let cuerpo_unknown = body_json(unknown).await;
    assert_eq!(cuerpo_wrong, cuerpo_unknown);
    assert_eq!(cuerpo_wrong["error"], "Credenciales inválidas");
}

#[tokio::test]
async fn protected_routes_reject_missing_or_bad_tokens() {
    let app = app_with_usuario().await;

    let sin_token = app.clone().oneshot(get("/api/fondo", None)).await.unwrap();
    assert_eq!(sin_token.status(), StatusCode::UNAUTHORIZED);

    let token_malo = app
        .clone()
        .oneshot(get("/api/fondo", Some("no-es-un-jwt")))
        .await
        .unwrap();
    assert_eq!(token_malo.status(), StatusCode::UNAUTHORIZED);

    let token = login(&app).await;
    let con_token = app.oneshot(get("/api/fondo", Some(&token))).await.unwrap();
    assert_eq!(con_token.status(), StatusCode::OK);
}

#[tokio::test]
async fn deposito_and_tipofondo_work_without_token() {
    let app = app_with_usuario().await;

    let depositos = app.clone().oneshot(get("/api/deposito", None)).await.unwrap();
    assert_eq!(depositos.status(), StatusCode::OK);

    let creado = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/tipofondo",
            None,
            &json!({"nombre": "Ahorros"}),
        ))
        .await
        .unwrap();
    assert_eq!(creado.status(), StatusCode::CREATED);
    let body = body_json(creado).await;
    assert_eq!(body["nombre"], "Ahorros");

    let listados = app.oneshot(get("/api/tipofondo", None)).await.unwrap();
    assert_eq!(listados.status(), StatusCode::OK);
    assert_eq!(body_json(listados).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn deposito_creation_moves_fondo_saldo() {
    let app = app_with_usuario().await;
    let token = login(&app).await;

    let tipo = body_json(
        app.clone()
            .oneshot(send_json(
                "POST",
                "/api/tipofondo",
                None,
                &json!({"nombre": "Ahorros"}),
            ))
            .await
            .unwrap(),
    )
    .await;
    let fondo = body_json(
        app.clone()
            .oneshot(send_json(
                "POST",
                "/api/fondo",
                Some(&token),
                &json!({
                    "nroCuenta": "100-200",
                    "nombreFondo": "Ahorro general",
                    "tipoFondoId": tipo["id"],
                    "saldo": 100.0,
                    "descripcion": null,
                    "activo": true
                }),
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(fondo["tipoFondoNombre"], "Ahorros");
    let fondo_id = fondo["id"].as_i64().unwrap();

    // Deposits are public; no token on purpose.
    let deposito = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/deposito",
            None,
            &json!({
                "fechaDeposito": "2025-03-10T12:00:00Z",
                "idFondo": fondo_id,
                "monto": 50.25
            }),
        ))
        .await
        .unwrap();
    assert_eq!(deposito.status(), StatusCode::CREATED);
    let cuerpo = body_json(deposito).await;
    assert_eq!(cuerpo["monto"].as_f64(), Some(50.25));
    assert_eq!(cuerpo["idFondo"].as_i64(), Some(fondo_id));

    let releido = body_json(
        app.oneshot(get(&format!("/api/fondo/{fondo_id}"), Some(&token)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(releido["saldo"].as_f64(), Some(150.25));
}

#[tokio::test]
async fn deposito_with_unknown_fondo_is_400() {
    let app = app_with_usuario().await;

    let res = app
        .oneshot(send_json(
            "POST",
            "/api/deposito",
            None,
            &json!({
                "fechaDeposito": "2025-03-10T12:00:00Z",
                "idFondo": 999,
                "monto": 10.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["error"], "El fondo especificado no existe");
}

#[tokio::test]
async fn fondo_put_with_mismatched_id_is_400() {
    let app = app_with_usuario().await;
    let token = login(&app).await;

    let tipo = body_json(
        app.clone()
            .oneshot(send_json(
                "POST",
                "/api/tipofondo",
                None,
                &json!({"nombre": "Ahorros"}),
            ))
            .await
            .unwrap(),
    )
    .await;
    let fondo = body_json(
        app.clone()
            .oneshot(send_json(
                "POST",
                "/api/fondo",
                Some(&token),
                &json!({
                    "nroCuenta": "1-2",
                    "nombreFondo": "Caja",
                    "tipoFondoId": tipo["id"],
                    "saldo": 0.0,
                    "descripcion": null,
                    "activo": true
                }),
            ))
            .await
            .unwrap(),
    )
    .await;
    let fondo_id = fondo["id"].as_i64().unwrap();

    let res = app
        .oneshot(send_json(
            "PUT",
            &format!("/api/fondo/{fondo_id}"),
            Some(&token),
            &json!({
                "id": fondo_id + 1,
                "nroCuenta": "1-2",
                "nombreFondo": "Caja",
                "tipoFondoId": tipo["id"],
                "saldo": 0.0,
                "descripcion": null,
                "activo": true
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(res).await["error"],
        "ID en URL no coincide con ID en objeto"
    );
}

#[tokio::test]
async fn tipogasto_codes_are_assigned_and_names_unique() {
    let app = app_with_usuario().await;
    let token = login(&app).await;

    let primero = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/tipogasto",
            Some(&token),
            &json!({"nombre": "Alimentación", "descripcion": null}),
        ))
        .await
        .unwrap();
    assert_eq!(primero.status(), StatusCode::CREATED);
    assert_eq!(body_json(primero).await["codigo"], "TG001");

    let segundo = body_json(
        app.clone()
            .oneshot(send_json(
                "POST",
                "/api/tipogasto",
                Some(&token),
                &json!({"nombre": "Transporte", "descripcion": "Buses y taxis"}),
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(segundo["codigo"], "TG002");

    let repetido = app
        .oneshot(send_json(
            "POST",
            "/api/tipogasto",
            Some(&token),
            &json!({"nombre": "Transporte", "descripcion": null}),
        ))
        .await
        .unwrap();
    assert_eq!(repetido.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn presupuesto_round_trip_and_duplicate_conflict() {
    let app = app_with_usuario().await;
    let token = login(&app).await;

    let tipo = body_json(
        app.clone()
            .oneshot(send_json(
                "POST",
                "/api/tipogasto",
                Some(&token),
                &json!({"nombre": "Alimentación", "descripcion": null}),
            ))
            .await
            .unwrap(),
    )
    .await;

    let creado = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/presupuesto",
            Some(&token),
            &json!({
                "tipoGastoId": tipo["id"],
                "mes": 3,
                "anio": 2025,
                "monto": 350.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(creado.status(), StatusCode::CREATED);
    let body = body_json(creado).await;
    assert_eq!(body["nombreMes"], "Marzo");
    assert_eq!(body["tipoGastoNombre"], "Alimentación");
    assert_eq!(body["monto"].as_f64(), Some(350.0));

    let duplicado = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/presupuesto",
            Some(&token),
            &json!({
                "tipoGastoId": tipo["id"],
                "mes": 3,
                "anio": 2025,
                "monto": 100.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(duplicado.status(), StatusCode::CONFLICT);

    // Replacing a budget answers 200 with the stored row.
    let id = body["id"].as_i64().unwrap();
    let reemplazo = app
        .oneshot(send_json(
            "PUT",
            &format!("/api/presupuesto/{id}"),
            Some(&token),
            &json!({
                "tipoGastoId": tipo["id"],
                "mes": 3,
                "anio": 2025,
                "monto": 420.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(reemplazo.status(), StatusCode::OK);
    assert_eq!(body_json(reemplazo).await["monto"].as_f64(), Some(420.0));
}

#[tokio::test]
async fn tipofondo_put_answers_204_without_body() {
    let app = app_with_usuario().await;

    let creado = body_json(
        app.clone()
            .oneshot(send_json(
                "POST",
                "/api/tipofondo",
                None,
                &json!({"nombre": "Ahorros"}),
            ))
            .await
            .unwrap(),
    )
    .await;
    let id = creado["id"].as_i64().unwrap();

    let res = app
        .oneshot(send_json(
            "PUT",
            &format!("/api/tipofondo/{id}"),
            None,
            &json!({"id": id, "nombre": "Plazo fijo"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn secure_endpoint_answers_behind_token_only() {
    let app = app_with_usuario().await;

    let sin_token = app
        .clone()
        .oneshot(get("/api/secure/datos-protegidos", None))
        .await
        .unwrap();
    assert_eq!(sin_token.status(), StatusCode::UNAUTHORIZED);

    let token = login(&app).await;
    let res = app
        .oneshot(get("/api/secure/datos-protegidos", Some(&token)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        body_json(res).await["mensaje"],
        "Acceso autorizado a datos protegidos"
    );
}

#[tokio::test]
async fn missing_rows_answer_404_with_error_body() {
    let app = app_with_usuario().await;
    let token = login(&app).await;

    let res = app.oneshot(get("/api/fondo/42", Some(&token))).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(res).await["error"],
        "No se encontró el fondo con ID 42"
    );
}
