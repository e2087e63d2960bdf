use rust_decimal::Decimal;
use sea_orm::{Database, DatabaseConnection};

use engine::{Engine, EngineError, FondoInput};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

fn input_basico(tipo_fondo_id: i32) -> FondoInput {
    FondoInput {
        nro_cuenta: "100-200-300".to_string(),
        nombre_fondo: "Ahorro programado".to_string(),
        tipo_fondo_id,
        saldo: Decimal::new(15075, 2),
        descripcion: Some("Cuenta del banco".to_string()),
        activo: true,
    }
}

#[tokio::test]
async fn create_fondo_round_trips_with_tipo_nombre() {
    let (engine, _db) = engine_with_db().await;
    let tipo = engine.new_tipo_fondo("Ahorros").await.unwrap();

    let creado = engine.new_fondo(input_basico(tipo.id)).await.unwrap();
    assert_eq!(creado.fondo.nro_cuenta, "100-200-300");
    assert_eq!(creado.fondo.nombre_fondo, "Ahorro programado");
    assert_eq!(creado.fondo.saldo_centavos, 15075);
    assert_eq!(creado.fondo.descripcion.as_deref(), Some("Cuenta del banco"));
    assert!(creado.fondo.activo);
    assert_eq!(creado.tipo_fondo_nombre, "Ahorros");

    let leido = engine.fondo(creado.fondo.id).await.unwrap();
    assert_eq!(leido, creado);
    assert_eq!(engine.fondos().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_fondo_rejects_unknown_tipo() {
    let (engine, _db) = engine_with_db().await;

    let err = engine.new_fondo(input_basico(99)).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::MissingReference("El tipo de fondo especificado no existe".to_string())
    );
    assert!(engine.fondos().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_fondo_rejects_duplicate_nro_cuenta() {
    let (engine, _db) = engine_with_db().await;
    let tipo = engine.new_tipo_fondo("Ahorros").await.unwrap();
    engine.new_fondo(input_basico(tipo.id)).await.unwrap();

    let mut repetido = input_basico(tipo.id);
    repetido.nombre_fondo = "Otro nombre".to_string();
    let err = engine.new_fondo(repetido).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::Conflict("El número de cuenta ya existe".to_string())
    );
}

#[tokio::test]
async fn create_fondo_validates_texts_and_scale() {
    let (engine, _db) = engine_with_db().await;
    let tipo = engine.new_tipo_fondo("Ahorros").await.unwrap();

    let mut sin_cuenta = input_basico(tipo.id);
    sin_cuenta.nro_cuenta = "   ".to_string();
    let err = engine.new_fondo(sin_cuenta).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation("El número de cuenta es obligatorio".to_string())
    );

    let mut sin_nombre = input_basico(tipo.id);
    sin_nombre.nombre_fondo = String::new();
    let err = engine.new_fondo(sin_nombre).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation("El nombre del fondo es obligatorio".to_string())
    );

    let mut tres_decimales = input_basico(tipo.id);
    tres_decimales.saldo = Decimal::new(10123, 3);
    let err = engine.new_fondo(tres_decimales).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation("El monto admite como máximo dos decimales".to_string())
    );
}

#[tokio::test]
async fn update_fondo_replaces_every_field() {
    let (engine, _db) = engine_with_db().await;
    let ahorros = engine.new_tipo_fondo("Ahorros").await.unwrap();
    let corriente = engine.new_tipo_fondo("Corriente").await.unwrap();
    let creado = engine.new_fondo(input_basico(ahorros.id)).await.unwrap();

    engine
        .update_fondo(
            creado.fondo.id,
            FondoInput {
                nro_cuenta: "999-1".to_string(),
                nombre_fondo: "Gastos diarios".to_string(),
                tipo_fondo_id: corriente.id,
                saldo: Decimal::new(50, 0),
                descripcion: None,
                activo: false,
            },
        )
        .await
        .unwrap();

    let leido = engine.fondo(creado.fondo.id).await.unwrap();
    assert_eq!(leido.fondo.nro_cuenta, "999-1");
    assert_eq!(leido.fondo.saldo_centavos, 5000);
    assert_eq!(leido.fondo.descripcion, None);
    assert!(!leido.fondo.activo);
    assert_eq!(leido.tipo_fondo_nombre, "Corriente");
}

#[tokio::test]
async fn update_fondo_unknown_id_is_not_found() {
    let (engine, _db) = engine_with_db().await;
    let tipo = engine.new_tipo_fondo("Ahorros").await.unwrap();

    let err = engine
        .update_fondo(42, input_basico(tipo.id))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::NotFound("No se encontró el fondo con ID 42".to_string())
    );
}

#[tokio::test]
async fn deactivate_fondo_hides_it_from_activos_only() {
    let (engine, _db) = engine_with_db().await;
    let tipo = engine.new_tipo_fondo("Ahorros").await.unwrap();
    let primero = engine.new_fondo(input_basico(tipo.id)).await.unwrap();
    let mut otro = input_basico(tipo.id);
    otro.nro_cuenta = "200-1".to_string();
    engine.new_fondo(otro).await.unwrap();

    engine.deactivate_fondo(primero.fondo.id).await.unwrap();

    assert_eq!(engine.fondos().await.unwrap().len(), 2);
    let activos = engine.fondos_activos().await.unwrap();
    assert_eq!(activos.len(), 1);
    assert_eq!(activos[0].fondo.nro_cuenta, "200-1");

    // The row survives untouched apart from the flag.
    let apagado = engine.fondo(primero.fondo.id).await.unwrap();
    assert!(!apagado.fondo.activo);
    assert_eq!(apagado.fondo.saldo_centavos, 15075);
}

#[tokio::test]
async fn tipo_fondo_crud_and_delete_guard() {
    let (engine, _db) = engine_with_db().await;
    let usado = engine.new_tipo_fondo("Ahorros").await.unwrap();
    let libre = engine.new_tipo_fondo("Inversión").await.unwrap();
    engine.new_fondo(input_basico(usado.id)).await.unwrap();

    let err = engine.new_tipo_fondo("Ahorros").await.unwrap_err();
    assert_eq!(
        err,
        EngineError::Conflict("El nombre del tipo de fondo ya existe".to_string())
    );

    let err = engine.delete_tipo_fondo(usado.id).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::Conflict(
            "No se puede eliminar el tipo porque tiene fondos asociados".to_string()
        )
    );

    engine.update_tipo_fondo(libre.id, "Plazo fijo").await.unwrap();
    assert_eq!(engine.tipo_fondo(libre.id).await.unwrap().nombre, "Plazo fijo");

    engine.delete_tipo_fondo(libre.id).await.unwrap();
    let err = engine.tipo_fondo(libre.id).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::NotFound(format!("No se encontró el tipo de fondo con ID {}", libre.id))
    );
    assert_eq!(engine.tipos_fondo().await.unwrap().len(), 1);
}
