//! `SeaORM` Entity, @generated manually
//!
//! A saved trade idea with its entry/stop/target levels and execution state.

use std::fmt;

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use super::{set_if_missing, DEFAULT_EXCHANGE};

/// Whether the executor may act on a plan, and how far it got.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ExecutionFlag {
    #[default]
    #[sea_orm(string_value = "Disabled")]
    Disabled,
    #[sea_orm(string_value = "Enabled")]
    Enabled,
    #[sea_orm(string_value = "Traded")]
    Traded,
    #[sea_orm(string_value = "Exited")]
    Exited,
}

impl ExecutionFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionFlag::Disabled => "Disabled",
            ExecutionFlag::Enabled => "Enabled",
            ExecutionFlag::Traded => "Traded",
            ExecutionFlag::Exited => "Exited",
        }
    }
}

impl fmt::Display for ExecutionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trade_plan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub trade_id: i32,
    #[sea_orm(indexed)]
    pub user_id: Option<i32>,
    pub trading_symbol: String,
    #[sea_orm(default_value = "NSE")]
    pub exchange: String,
    pub instrument: String,

    pub time_frame: String, // "Daily", "Hourly", "15 Min"
    pub trade_direction: String, // "Bullish", "Bearish"
    pub trade_type: String, // "Swing", "Momentum", "Neutral"
    pub trade_setup: String, // "Breakout", "Double Bottom", ...

    pub entry_price: Option<f64>,
    pub stop_loss: Option<f64>,
    pub target_price: Option<f64>,

    pub signal: Option<String>,
    pub probability: Option<String>,
    pub score: Option<f64>,

    pub execution_strategy: Option<String>,
    #[sea_orm(default_value = "Disabled")]
    pub execution_flag: ExecutionFlag,
    pub status: Option<String>, // "Pending", "Executed", "Exited"

    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeUtc,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        if insert {
            set_if_missing(&mut self.exchange, DEFAULT_EXCHANGE.to_string());
            set_if_missing(&mut self.execution_flag, ExecutionFlag::Disabled);
            set_if_missing(&mut self.created_at, now);
        }
        self.updated_at = ActiveValue::Set(now);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveEnum, Iterable};

    #[test]
    fn test_execution_flag_values() {
        assert_eq!(ExecutionFlag::default(), ExecutionFlag::Disabled);
        assert_eq!(ExecutionFlag::Traded.to_value(), "Traded");
        assert_eq!(
            ExecutionFlag::try_from_value(&"Exited".to_string()).unwrap(),
            ExecutionFlag::Exited
        );
        assert!(ExecutionFlag::try_from_value(&"Paused".to_string()).is_err());
    }

    #[test]
    fn test_execution_flag_display_matches_stored_value() {
        for flag in ExecutionFlag::iter() {
            assert_eq!(flag.to_string(), flag.to_value());
        }
    }
}
