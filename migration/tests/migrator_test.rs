//! Applies the migrations to an in-memory SQLite database and checks that the
//! entities in `shared` can read and write the resulting tables.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, Statement};
use shared::entity::{indicator_data, instrument_master, trade_plan, users};
use shared::Database;

async fn migrated() -> Database {
    let db = Database::new("sqlite::memory:", false).unwrap();
    Migrator::up(db.connection().await.unwrap(), None).await.unwrap();
    db
}

#[tokio::test]
async fn test_migrations_apply_and_match_entities() {
    let db = migrated().await;
    let conn = db.connection().await.unwrap();

    let plan = trade_plan::ActiveModel {
        trading_symbol: ActiveValue::Set("RELIANCE".to_string()),
        instrument: ActiveValue::Set("EQUITY".to_string()),
        time_frame: ActiveValue::Set("Daily".to_string()),
        trade_direction: ActiveValue::Set("Bullish".to_string()),
        trade_type: ActiveValue::Set("Swing".to_string()),
        trade_setup: ActiveValue::Set("Breakout".to_string()),
        ..Default::default()
    }
    .insert(conn)
    .await
    .unwrap();
    assert_eq!(plan.execution_flag, trade_plan::ExecutionFlag::Disabled);

    let snapshot = indicator_data::ActiveModel {
        trading_symbol: ActiveValue::Set(Some("NIFTY".to_string())),
        timeframe: ActiveValue::Set(Some("15m".to_string())),
        ema_200: ActiveValue::Set(Some(21950.5)),
        volume_sma_10: ActiveValue::Set(Some(1200.0)),
        bollinger_upper_3: ActiveValue::Set(Some(22500.0)),
        supertrend: ActiveValue::Set(Some(indicator_data::supertrend_value(true))),
        ..Default::default()
    }
    .insert(conn)
    .await
    .unwrap();
    let stored = indicator_data::Entity::find_by_id(snapshot.id)
        .one(conn)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.ema_200, Some(21950.5));
    assert_eq!(stored.supertrend_bullish(), Some(true));
}

#[tokio::test]
async fn test_migrated_schema_enforces_keys() {
    let db = migrated().await;
    let conn = db.connection().await.unwrap();

    let instrument = || instrument_master::ActiveModel {
        security_id: ActiveValue::Set(1333),
        exchange_segment: ActiveValue::Set("NSE_EQ".to_string()),
        trading_symbol: ActiveValue::Set(Some("HDFCBANK".to_string())),
        ..Default::default()
    };
    instrument().insert(conn).await.unwrap();
    assert!(instrument().insert(conn).await.is_err());

    let user = |email: &str| users::ActiveModel {
        email: ActiveValue::Set(Some(email.to_string())),
        ..Default::default()
    };
    user("a@example.com").insert(conn).await.unwrap();
    assert!(user("a@example.com").insert(conn).await.is_err());
}

#[tokio::test]
async fn test_indicator_index_matches_entity() {
    let db = migrated().await;
    let conn = db.connection().await.unwrap();
    let rows = conn
        .query_all(Statement::from_string(
            conn.get_database_backend(),
            "SELECT ii.name AS name FROM pragma_index_list('indicator_data') AS il, pragma_index_info(il.name) AS ii",
        ))
        .await
        .unwrap();
    let columns: Vec<String> = rows
        .iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect();
    assert_eq!(columns, vec!["trading_symbol".to_string()]);
}

#[tokio::test]
async fn test_down_removes_tables() {
    let db = migrated().await;
    let conn = db.connection().await.unwrap();
    Migrator::down(conn, None).await.unwrap();

    let backend = conn.get_database_backend();
    let remaining = conn
        .query_all(Statement::from_string(
            backend,
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('trade_plan', 'instrument_master', 'indicator_data')",
        ))
        .await
        .unwrap();
    assert!(remaining.is_empty());
}
