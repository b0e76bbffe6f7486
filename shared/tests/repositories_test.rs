use std::sync::Arc;

use sea_orm::{ActiveValue, DatabaseConnection};
use shared::entity::trade_plan::ExecutionFlag;
use shared::entity::{instrument_master, ledger_report, live_trades, trade_plan};
use shared::repositories::{
    InstrumentRepository, LedgerRepository, LiveTradeRepository, TradePlanRepository,
};
use shared::{create_all, Database};

async fn connection() -> Arc<DatabaseConnection> {
    let db = Database::new("sqlite::memory:", false).unwrap();
    let conn = db.connection().await.unwrap().clone();
    create_all(&conn).await.unwrap();
    Arc::new(conn)
}

fn plan(user_id: i32, symbol: &str) -> trade_plan::ActiveModel {
    trade_plan::ActiveModel {
        user_id: ActiveValue::Set(Some(user_id)),
        trading_symbol: ActiveValue::Set(symbol.to_string()),
        instrument: ActiveValue::Set("EQUITY".to_string()),
        time_frame: ActiveValue::Set("Daily".to_string()),
        trade_direction: ActiveValue::Set("Bullish".to_string()),
        trade_type: ActiveValue::Set("Swing".to_string()),
        trade_setup: ActiveValue::Set("Breakout".to_string()),
        entry_price: ActiveValue::Set(Some(100.0)),
        stop_loss: ActiveValue::Set(Some(95.0)),
        target_price: ActiveValue::Set(Some(115.0)),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_instrument_repository() {
    let repo = InstrumentRepository::new(connection().await);

    for (security_id, segment, symbol) in [
        (2885, "NSE_EQ", "RELIANCE"),
        (1333, "NSE_EQ", "HDFCBANK"),
        (35001, "NSE_FNO", "NIFTY24JUNFUT"),
    ] {
        repo.insert(instrument_master::ActiveModel {
            security_id: ActiveValue::Set(security_id),
            exchange_segment: ActiveValue::Set(segment.to_string()),
            trading_symbol: ActiveValue::Set(Some(symbol.to_string())),
            ..Default::default()
        })
        .await
        .unwrap();
    }

    let found = repo.find_by_key(2885, "NSE_EQ").await.unwrap().unwrap();
    assert_eq!(found.trading_symbol.as_deref(), Some("RELIANCE"));
    assert!(repo.find_by_key(2885, "NSE_FNO").await.unwrap().is_none());

    let equities = repo.list_by_segment("NSE_EQ").await.unwrap();
    let ids: Vec<i32> = equities.iter().map(|i| i.security_id).collect();
    assert_eq!(ids, vec![1333, 2885]);

    assert_eq!(repo.find_by_symbol("NIFTY24JUNFUT").await.unwrap().len(), 1);
    assert_eq!(repo.count().await.unwrap(), 3);

    let duplicate = repo
        .insert(instrument_master::ActiveModel {
            security_id: ActiveValue::Set(1333),
            exchange_segment: ActiveValue::Set("NSE_EQ".to_string()),
            ..Default::default()
        })
        .await;
    assert!(duplicate.is_err());
}

#[tokio::test]
async fn test_trade_plan_flag_lifecycle() {
    let repo = TradePlanRepository::new(connection().await);

    let created = repo.create(plan(7, "TATAMOTORS")).await.unwrap();
    repo.create(plan(7, "SBIN")).await.unwrap();
    repo.create(plan(8, "ITC")).await.unwrap();
    assert_eq!(created.execution_flag, ExecutionFlag::Disabled);

    let enabled = repo
        .set_execution_flag(created.trade_id, ExecutionFlag::Enabled)
        .await
        .unwrap();
    assert_eq!(enabled.execution_flag, ExecutionFlag::Enabled);
    assert!(enabled.updated_at >= created.updated_at);
    assert_eq!(enabled.created_at, created.created_at);

    let enabled_plans = repo.list_by_flag(ExecutionFlag::Enabled).await.unwrap();
    assert_eq!(enabled_plans.len(), 1);
    assert_eq!(enabled_plans[0].trading_symbol, "TATAMOTORS");
    assert_eq!(repo.list_by_flag(ExecutionFlag::Disabled).await.unwrap().len(), 2);

    assert_eq!(repo.list_for_user(7).await.unwrap().len(), 2);
    assert!(repo.set_execution_flag(999, ExecutionFlag::Traded).await.is_err());
}

#[tokio::test]
async fn test_live_trade_legs() {
    let repo = LiveTradeRepository::new(connection().await);

    let leg = |trade_id: i32, symbol: &str, exit_price: Option<f64>| live_trades::ActiveModel {
        user_id: ActiveValue::Set(Some(3)),
        trade_id: ActiveValue::Set(Some(trade_id)),
        trading_symbol: ActiveValue::Set(symbol.to_string()),
        instrument: ActiveValue::Set("OPTIDX".to_string()),
        transaction_type: ActiveValue::Set(Some("SELL".to_string())),
        entry_price: ActiveValue::Set(Some(120.0)),
        entry_quantity: ActiveValue::Set(Some(50)),
        exit_price: ActiveValue::Set(exit_price),
        ..Default::default()
    };

    repo.create(leg(1, "NIFTY 22000 CE", None)).await.unwrap();
    repo.create(leg(1, "NIFTY 21800 PE", Some(80.0))).await.unwrap();
    repo.create(leg(2, "BANKNIFTY 48000 CE", None)).await.unwrap();

    let legs = repo.legs_for_trade(1).await.unwrap();
    assert_eq!(legs.len(), 2);
    assert!(legs.iter().all(|l| l.status == "Traded" && l.exchange == "NSE"));

    let open = repo.open_for_user(3).await.unwrap();
    let symbols: Vec<&str> = open.iter().map(|l| l.trading_symbol.as_str()).collect();
    assert_eq!(symbols, vec!["NIFTY 22000 CE", "BANKNIFTY 48000 CE"]);
}

#[tokio::test]
async fn test_ledger_latest_balance() {
    let repo = LedgerRepository::new(connection().await);
    assert_eq!(repo.latest_balance(1).await.unwrap(), None);

    let mut balance = 0.0;
    for (credit, debit) in [(10_000.0, 0.0), (0.0, 2_500.0), (500.0, 0.0)] {
        balance += credit - debit;
        repo.append(ledger_report::ActiveModel {
            user_id: ActiveValue::Set(Some(1)),
            narration: ActiveValue::Set(Some("Funds".to_string())),
            credit: ActiveValue::Set(Some(credit)),
            debit: ActiveValue::Set(Some(debit)),
            running_balance: ActiveValue::Set(Some(balance)),
            ..Default::default()
        })
        .await
        .unwrap();
    }

    assert_eq!(repo.latest_balance(1).await.unwrap(), Some(8_000.0));
    let entries = repo.entries_for_user(1).await.unwrap();
    let net: f64 = entries.iter().map(|e| e.net_amount()).sum();
    assert_eq!(net, 8_000.0);
    assert_eq!(repo.latest_balance(2).await.unwrap(), None);
}
