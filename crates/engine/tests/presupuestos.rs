use rust_decimal::Decimal;
use sea_orm::{Database, DatabaseConnection};

use engine::{Engine, EngineError, PresupuestoInput, TipoGastoInput};
use migration::MigratorTrait;

/// Engine plus two expense types to budget against.
async fn engine_with_tipos() -> (Engine, DatabaseConnection, i32, i32) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();

    let alimentacion = engine
        .new_tipo_gasto(TipoGastoInput {
            nombre: "Alimentación".to_string(),
            descripcion: None,
        })
        .await
        .unwrap();
    let transporte = engine
        .new_tipo_gasto(TipoGastoInput {
            nombre: "Transporte".to_string(),
            descripcion: None,
        })
        .await
        .unwrap();
    (engine, db, alimentacion.id, transporte.id)
}

fn presupuesto_de(tipo_gasto_id: i32, mes: u8, anio: i32) -> PresupuestoInput {
    PresupuestoInput {
        tipo_gasto_id,
        mes,
        anio,
        monto: Decimal::new(35000, 2),
    }
}

#[tokio::test]
async fn create_round_trips_with_tipo_nombre() {
    let (engine, _db, alimentacion, _) = engine_with_tipos().await;

    let creado = engine
        .new_presupuesto(presupuesto_de(alimentacion, 3, 2025))
        .await
        .unwrap();
    assert_eq!(creado.presupuesto.mes, 3);
    assert_eq!(creado.presupuesto.anio, 2025);
    assert_eq!(creado.presupuesto.monto_centavos, 35000);
    assert_eq!(creado.tipo_gasto_nombre, "Alimentación");

    let leido = engine.presupuesto(creado.presupuesto.id).await.unwrap();
    assert_eq!(leido, creado);
    assert_eq!(engine.presupuestos().await.unwrap().len(), 1);
}

#[tokio::test]
async fn one_budget_per_tipo_mes_anio() {
    let (engine, _db, alimentacion, transporte) = engine_with_tipos().await;
    engine
        .new_presupuesto(presupuesto_de(alimentacion, 3, 2025))
        .await
        .unwrap();

    let err = engine
        .new_presupuesto(presupuesto_de(alimentacion, 3, 2025))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Conflict(
            "Ya existe un presupuesto para este tipo de gasto en el mismo mes y año".to_string()
        )
    );

    // Any one coordinate differing makes it a distinct budget.
    engine
        .new_presupuesto(presupuesto_de(alimentacion, 4, 2025))
        .await
        .unwrap();
    engine
        .new_presupuesto(presupuesto_de(alimentacion, 3, 2026))
        .await
        .unwrap();
    engine
        .new_presupuesto(presupuesto_de(transporte, 3, 2025))
        .await
        .unwrap();
    assert_eq!(engine.presupuestos().await.unwrap().len(), 4);
}

#[tokio::test]
async fn update_may_keep_its_own_combination() {
    let (engine, _db, alimentacion, _) = engine_with_tipos().await;
    let creado = engine
        .new_presupuesto(presupuesto_de(alimentacion, 3, 2025))
        .await
        .unwrap();

    let mut cambio = presupuesto_de(alimentacion, 3, 2025);
    cambio.monto = Decimal::new(48000, 2);
    let guardado = engine
        .update_presupuesto(creado.presupuesto.id, cambio)
        .await
        .unwrap();
    assert_eq!(guardado.presupuesto.monto_centavos, 48000);
    assert_eq!(guardado.presupuesto.mes, 3);
}

#[tokio::test]
async fn update_cannot_take_another_budgets_combination() {
    let (engine, _db, alimentacion, _) = engine_with_tipos().await;
    engine
        .new_presupuesto(presupuesto_de(alimentacion, 3, 2025))
        .await
        .unwrap();
    let segundo = engine
        .new_presupuesto(presupuesto_de(alimentacion, 4, 2025))
        .await
        .unwrap();

    let err = engine
        .update_presupuesto(segundo.presupuesto.id, presupuesto_de(alimentacion, 3, 2025))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Conflict(
            "Ya existe otro presupuesto para este tipo de gasto en el mismo mes y año".to_string()
        )
    );
}

#[tokio::test]
async fn create_validates_ranges() {
    let (engine, _db, alimentacion, _) = engine_with_tipos().await;

    let err = engine
        .new_presupuesto(presupuesto_de(alimentacion, 0, 2025))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation("El mes debe estar entre 1 y 12".to_string())
    );
    let err = engine
        .new_presupuesto(presupuesto_de(alimentacion, 13, 2025))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation("El mes debe estar entre 1 y 12".to_string())
    );

    let err = engine
        .new_presupuesto(presupuesto_de(alimentacion, 3, 1999))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation("El año debe estar entre 2000 y 2100".to_string())
    );
    let err = engine
        .new_presupuesto(presupuesto_de(alimentacion, 3, 2101))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation("El año debe estar entre 2000 y 2100".to_string())
    );

    let mut sin_monto = presupuesto_de(alimentacion, 3, 2025);
    sin_monto.monto = Decimal::ZERO;
    let err = engine.new_presupuesto(sin_monto).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation("El monto debe ser mayor que cero".to_string())
    );
}

#[tokio::test]
async fn create_rejects_unknown_tipo_gasto() {
    let (engine, _db, _, _) = engine_with_tipos().await;

    let err = engine
        .new_presupuesto(presupuesto_de(99, 3, 2025))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::MissingReference("El tipo de gasto especificado no existe".to_string())
    );
}

#[tokio::test]
async fn delete_and_missing_ids() {
    let (engine, _db, alimentacion, _) = engine_with_tipos().await;
    let creado = engine
        .new_presupuesto(presupuesto_de(alimentacion, 3, 2025))
        .await
        .unwrap();

    engine.delete_presupuesto(creado.presupuesto.id).await.unwrap();
    let err = engine.presupuesto(creado.presupuesto.id).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::NotFound(format!(
            "No se encontró el presupuesto con ID {}",
            creado.presupuesto.id
        ))
    );

    let err = engine.delete_presupuesto(42).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::NotFound("No se encontró el presupuesto con ID 42".to_string())
    );
}
