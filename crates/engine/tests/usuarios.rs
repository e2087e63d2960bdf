use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{Engine, credentials};
use migration::MigratorTrait;

async fn engine_with_usuario(activo: bool) -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO usuarios (nombre_usuario, contrasena, nombre, rol, activo) \
         VALUES (?, ?, ?, ?, ?)",
        vec![
            "mrojas".into(),
            credentials::digest("secreta123").into(),
            "María Rojas".into(),
            "Admin".into(),
            activo.into(),
        ],
    ))
    .await
    .unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

#[tokio::test]
async fn verify_accepts_correct_credentials() {
    let (engine, _db) = engine_with_usuario(true).await;

    let usuario = engine
        .verify_usuario("mrojas", "secreta123")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(usuario.nombre, "María Rojas");
    assert_eq!(usuario.rol, "Admin");
}

#[tokio::test]
async fn verify_rejects_wrong_password_and_unknown_user() {
    let (engine, _db) = engine_with_usuario(true).await;

    assert!(engine
        .verify_usuario("mrojas", "otra")
        .await
        .unwrap()
        .is_none());
    assert!(engine
        .verify_usuario("nadie", "secreta123")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn verify_rejects_deactivated_user() {
    let (engine, _db) = engine_with_usuario(false).await;

    assert!(engine
        .verify_usuario("mrojas", "secreta123")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn stored_digest_case_does_not_matter() {
    let (engine, db) = engine_with_usuario(true).await;
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO usuarios (nombre_usuario, contrasena, nombre, rol, activo) \
         VALUES (?, ?, ?, ?, ?)",
        vec![
            "jperez".into(),
            credentials::digest("clave").to_uppercase().into(),
            "Juan Pérez".into(),
            "Usuario".into(),
            true.into(),
        ],
    ))
    .await
    .unwrap();

    assert!(engine
        .verify_usuario("jperez", "clave")
        .await
        .unwrap()
        .is_some());
}
